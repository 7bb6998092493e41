use thiserror::Error;

/// Core error type shared across Dealergen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A dealer network or dataset violates its invariants.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// The vehicle catalog is malformed.
    #[error("invalid catalog: {0}")]
    Catalog(String),
}

/// Convenience alias for results returned by Dealergen crates.
pub type Result<T> = std::result::Result<T, Error>;
