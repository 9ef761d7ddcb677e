//! Velocity-model error type.

use thiserror::Error;

use tt_core::Location;

/// Errors produced by `tt-model`.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Query outside the model's axis span.  The graph builder absorbs this
    /// per edge (infinite slowness); everywhere else it is surfaced.
    #[error("location {0} is outside the velocity model")]
    OutOfModel(Location),

    /// The model file does not match the declared dimensions or contains an
    /// unparsable number.  Fatal.
    #[error("malformed velocity model {file}: {reason}")]
    Malformed { file: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `tt-model` operations.
pub type ModelResult<T> = Result<T, ModelError>;
