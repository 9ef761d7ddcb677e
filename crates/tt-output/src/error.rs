//! Error types for tt-output.

use thiserror::Error;

use tt_core::CoreError;

/// Errors that can occur while exporting results or touching the store.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("grid error: {0}")]
    Grid(#[from] CoreError),

    #[error("malformed weights file {file}: {reason}")]
    Malformed { file: String, reason: String },

    #[error("station and source coincide")]
    CoincidentEndpoints,

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
