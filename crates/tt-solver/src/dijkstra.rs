//! In-process Dijkstra over the slot-numbered graph.
//!
//! # Data layout
//!
//! The undirected edge list is expanded into Compressed Sparse Row (CSR)
//! adjacency — each edge contributes both directions — so the relaxation
//! loop scans a contiguous slice per vertex.
//!
//! The full distance array is needed by callers (per-vertex travel times are
//! persisted downstream), so the search runs to heap exhaustion instead of
//! stopping at the sink.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::engine::{PathEngine, SlotEdge, SolveOutcome};
use crate::error::{SolverError, SolverResult};

/// Standard binary-heap Dijkstra; the default engine.
pub struct DijkstraEngine;

/// Min-heap entry ordered by cost, ties broken on slot number for
/// deterministic settling order.
#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    cost: f64,
    slot: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathEngine for DijkstraEngine {
    fn solve(
        &self,
        edges: &[SlotEdge],
        num_vertices: usize,
        sink: usize,
    ) -> SolverResult<SolveOutcome> {
        if sink >= num_vertices {
            return Err(SolverError::malformed(
                "solve request",
                format!("sink slot {sink} out of range for {num_vertices} vertices"),
            ));
        }

        // CSR adjacency from the undirected edge list.
        let mut degree = vec![0u32; num_vertices + 1];
        for e in edges {
            if e.u >= num_vertices || e.v >= num_vertices {
                return Err(SolverError::malformed(
                    "solve request",
                    format!("edge ({}, {}) out of range for {num_vertices} vertices", e.u, e.v),
                ));
            }
            degree[e.u + 1] += 1;
            degree[e.v + 1] += 1;
        }
        for i in 1..=num_vertices {
            degree[i] += degree[i - 1];
        }
        let mut cursor: Vec<u32> = degree[..num_vertices].to_vec();
        let mut targets = vec![0usize; 2 * edges.len()];
        let mut costs = vec![0.0f64; 2 * edges.len()];
        for e in edges {
            for (from, to) in [(e.u, e.v), (e.v, e.u)] {
                let at = cursor[from] as usize;
                targets[at] = to;
                costs[at] = e.weight;
                cursor[from] += 1;
            }
        }

        let mut dist = vec![f64::INFINITY; num_vertices];
        let mut prev = vec![usize::MAX; num_vertices];
        dist[0] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { cost: 0.0, slot: 0 });

        while let Some(HeapEntry { cost, slot }) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist[slot] {
                continue;
            }
            let row = degree[slot] as usize..degree[slot + 1] as usize;
            for at in row {
                let neighbor = targets[at];
                let new_cost = cost + costs[at];
                if new_cost < dist[neighbor] {
                    dist[neighbor] = new_cost;
                    prev[neighbor] = slot;
                    heap.push(HeapEntry { cost: new_cost, slot: neighbor });
                }
            }
        }

        if !dist[sink].is_finite() {
            return Err(SolverError::NoRoute { sink });
        }

        // Walk predecessors from the sink back to slot 0.
        let mut path = Vec::new();
        let mut cur = sink;
        loop {
            path.push(cur);
            if cur == 0 {
                break;
            }
            cur = prev[cur];
        }

        Ok(SolveOutcome {
            shortest_weight: dist[sink],
            shortest_path: path,
            vertex_weights: dist,
        })
    }
}
