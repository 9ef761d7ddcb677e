//! Driver error type.
//!
//! Every stage of the state machine short-circuits through `?`, so a failed
//! run leaves no partial results behind.

use thiserror::Error;

use tt_core::CoreError;
use tt_graph::GraphError;
use tt_output::OutputError;
use tt_solver::SolverError;

/// Errors produced by `tt-path`.
#[derive(Debug, Error)]
pub enum PathError {
    /// The station's grid index is not touched by any edge — the corridor
    /// degenerated to nothing around it.
    #[error("station vertex is not part of the graph")]
    StationOutsideGraph,

    /// The source's grid index is not touched by any edge.
    #[error("source vertex is not part of the graph")]
    SourceOutsideGraph,

    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),

    #[error("path engine failed: {0}")]
    Solver(#[from] SolverError),

    #[error("result export failed: {0}")]
    Output(#[from] OutputError),

    #[error("grid error: {0}")]
    Grid(#[from] CoreError),

    #[error("external tool {tool} failed: {stderr}")]
    External { tool: String, stderr: String },

    #[error("malformed {what}: {reason}")]
    Malformed { what: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `tt-path` operations.
pub type PathResult<T> = Result<T, PathError>;
