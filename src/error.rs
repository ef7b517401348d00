//! Error types for the cluster log converter.

use thiserror::Error;

/// Result type alias for cluster log operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading a cluster log or writing CSV output.
///
/// Lines that do not parse are never errors; they are skipped by the parser.
/// Only environment-level failures and opt-in schema validation surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred while reading the log or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Feature-count validation failed for an implementation (strict mode only)
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Output location is unusable (e.g., output path exists but is not a directory)
    #[error("Output error: {0}")]
    OutputError(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
