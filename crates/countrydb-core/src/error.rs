// crates/countrydb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the country store and the query engine.
///
/// Every variant is local to the operation that raised it; none of them
/// leave the store partially mutated.
#[derive(Debug, Error)]
pub enum CountryDbError {
    /// The dataset file to load does not exist.
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The directory that should contain the saved dataset does not exist.
    #[error("destination unavailable: {}", .0.display())]
    DestinationUnavailable(PathBuf),

    /// A raw field failed validation.
    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("country already exists: {0}")]
    Duplicate(String),

    #[error("country not found: {0}")]
    NotFound(String),

    /// Statistics were requested over zero records.
    #[error("no countries loaded")]
    Empty,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CountryDbError>;
