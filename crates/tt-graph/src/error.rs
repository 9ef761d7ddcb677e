//! Graph-builder error type.

use thiserror::Error;

use tt_core::CoreError;
use tt_model::ModelError;

/// Errors produced by `tt-graph`.
///
/// `OutOfModel` never appears here: a vertex outside the velocity model
/// silently drops its edges (infinite slowness) instead of aborting the
/// build.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("station and source coincide")]
    CoincidentEndpoints,

    #[error("fine stage requires a non-empty corridor path")]
    EmptyCorridor,

    #[error("coarse stage does not accept a corridor path")]
    UnexpectedPath,

    #[error("grid error: {0}")]
    Grid(#[from] CoreError),

    #[error("velocity model error: {0}")]
    Model(#[from] ModelError),
}

/// Shorthand result type for `tt-graph` operations.
pub type GraphResult<T> = Result<T, GraphError>;
