use thiserror::Error;

/// Errors emitted by the dataset generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "exhausted value domain: wanted {requested} distinct values, found {collected} after {attempts} attempts"
    )]
    ExhaustedDomain {
        requested: usize,
        collected: usize,
        attempts: usize,
    },
    #[error("invalid count: {0}")]
    InvalidCount(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("empty catalog: {0}")]
    EmptyCatalog(String),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error("core error: {0}")]
    Core(#[from] dealergen_core::Error),
}
