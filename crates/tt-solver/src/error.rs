//! Solver error type.

use thiserror::Error;

/// Errors produced by `tt-solver`.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The sink slot is not reachable from slot 0.
    #[error("no path reaches sink slot {sink}")]
    NoRoute { sink: usize },

    /// Edge file or engine output that cannot be interpreted.  Fatal.
    #[error("malformed {what}: {reason}")]
    Malformed { what: String, reason: String },

    /// The external engine exited non-zero.
    #[error("external engine {program} failed: {stderr}")]
    External { program: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolverError {
    pub(crate) fn malformed(what: impl Into<String>, reason: impl Into<String>) -> Self {
        SolverError::Malformed { what: what.into(), reason: reason.into() }
    }
}

/// Shorthand result type for `tt-solver` operations.
pub type SolverResult<T> = Result<T, SolverError>;
