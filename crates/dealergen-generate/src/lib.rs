//! Synthetic dealer network generation for Dealergen.
//!
//! This crate draws dealers and vehicles from a static catalog with a
//! pluggable random source, and answers the small counted value requests
//! (hashes, uuids, slugs, colors) served next to the dataset.

pub mod assets;
pub mod counted;
pub mod dealer;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod network;
pub mod palette;
pub mod sampler;

pub use assets::{default_catalog, load_catalog_file, parse_catalog};
pub use counted::{CountParams, Counted, generate_counted};
pub use dealer::DealerGenerator;
pub use engine::{DatasetEngine, build_dataset};
pub use errors::GenerationError;
pub use model::{CountRange, GenerateOptions, VinScope};
pub use network::{NetworkGenerator, generate_network};
pub use palette::Palette;
pub use sampler::UniqueSampler;
