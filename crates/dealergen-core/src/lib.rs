//! Core contracts and helpers for Dealergen.
//!
//! This crate defines the dealer network data model, the catalog filter,
//! the summary aggregator and the invariant checks shared by the generator
//! and the CLI. Everything here is pure: no randomness, no I/O.

pub mod catalog;
pub mod error;
pub mod model;
pub mod summary;
pub mod validation;
pub mod vin;

pub use catalog::{
    Catalog, CatalogItem, CatalogView, Classifier, ViewKind, exotics, groups, makes, non_exotics,
};
pub use error::{Error, Result};
pub use model::{
    CatalogEntry, Dataset, DatasetData, Dealer, DealerNetwork, GroupSummary, InventoryStats,
    SummaryCounts, Vehicle,
};
pub use summary::{flatten_vehicles, inventory_stats, summarize, summarize_inventory};
pub use validation::{validate_dataset, validate_network};
pub use vin::{CHECK_DIGIT_INDEX, VIN_ALPHABET, VIN_LEN, is_valid_vin, vin_check_digit};

/// Current contract version for serialized datasets.
pub const DATASET_VERSION: &str = "0.1";
