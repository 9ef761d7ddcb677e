//! Adapter for an out-of-process Dijkstra engine.
//!
//! The engine is an executable whose single argument is an edge-file path
//! and whose stdout is a JSON object:
//!
//! ```json
//! {
//!   "shortest_weight": "1.81024",
//!   "shortest_path": [5, "4", 0],
//!   "total_shortest_vertex_weight": ["0", 1.2, "2.4"]
//! }
//! ```
//!
//! Engines disagree on whether numbers are emitted as JSON numbers or as
//! strings; both are accepted, field by field.

use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use crate::edgefile;
use crate::engine::{PathEngine, SlotEdge, SolveOutcome};
use crate::error::{SolverError, SolverResult};

/// Runs an external Dijkstra executable over a temporary edge file.
pub struct ExternalEngine {
    program: PathBuf,
    edge_file: PathBuf,
}

impl ExternalEngine {
    /// `program` is invoked as `program <edge_file>` for every solve; the
    /// edge file is rewritten in place each time.
    pub fn new(program: impl Into<PathBuf>, edge_file: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), edge_file: edge_file.into() }
    }
}

impl PathEngine for ExternalEngine {
    fn solve(
        &self,
        edges: &[SlotEdge],
        num_vertices: usize,
        sink: usize,
    ) -> SolverResult<SolveOutcome> {
        edgefile::write_edge_file(&self.edge_file, edges, num_vertices, sink)?;
        let output = Command::new(&self.program).arg(&self.edge_file).output()?;
        if !output.status.success() {
            return Err(SolverError::External {
                program: self.program.display().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        parse_engine_output(&output.stdout)
    }
}

// ── JSON decoding ─────────────────────────────────────────────────────────────

/// A JSON value that is either a number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self, what: &str) -> SolverResult<f64> {
        match self {
            NumberOrString::Number(v) => Ok(*v),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| SolverError::malformed("engine output", format!("bad {what} {s:?}"))),
        }
    }

    fn as_slot(&self, what: &str) -> SolverResult<usize> {
        match self {
            NumberOrString::Number(v) if v.fract() == 0.0 && *v >= 0.0 => Ok(*v as usize),
            NumberOrString::Number(v) => Err(SolverError::malformed(
                "engine output",
                format!("bad {what} {v}"),
            )),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<usize>()
                .map_err(|_| SolverError::malformed("engine output", format!("bad {what} {s:?}"))),
        }
    }
}

#[derive(Deserialize)]
struct RawOutcome {
    shortest_weight: NumberOrString,
    shortest_path: Vec<NumberOrString>,
    total_shortest_vertex_weight: Vec<NumberOrString>,
}

/// Decode the engine's stdout into a [`SolveOutcome`].
pub(crate) fn parse_engine_output(stdout: &[u8]) -> SolverResult<SolveOutcome> {
    let raw: RawOutcome = serde_json::from_slice(stdout)?;
    Ok(SolveOutcome {
        shortest_weight: raw.shortest_weight.as_f64("shortest_weight")?,
        shortest_path: raw
            .shortest_path
            .iter()
            .map(|v| v.as_slot("path slot"))
            .collect::<SolverResult<_>>()?,
        vertex_weights: raw
            .total_shortest_vertex_weight
            .iter()
            .map(|v| v.as_f64("vertex weight"))
            .collect::<SolverResult<_>>()?,
    })
}
