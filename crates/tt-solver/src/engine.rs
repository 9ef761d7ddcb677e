//! The engine contract shared by the in-process and external solvers.

use crate::error::SolverResult;

/// One undirected edge between two slot numbers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// Everything an engine reports for one solve.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    /// Travel time of the shortest path from slot 0 to the sink.
    pub shortest_weight: f64,
    /// Slot numbers along the shortest path, from the sink back to slot 0.
    pub shortest_path: Vec<usize>,
    /// Shortest distance from slot 0 for every slot, indexed by slot number;
    /// `f64::INFINITY` for unreachable slots.
    pub vertex_weights: Vec<f64>,
}

/// A shortest-path engine.
///
/// The source is always slot 0 — the driver pins the station there when it
/// numbers the vertices.  Implementations must be deterministic for a given
/// edge list.
pub trait PathEngine {
    fn solve(
        &self,
        edges: &[SlotEdge],
        num_vertices: usize,
        sink: usize,
    ) -> SolverResult<SolveOutcome>;
}
