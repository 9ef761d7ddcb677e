//! Contiguous slot numbering for one engine invocation.
//!
//! Engines work on dense slot numbers, not sparse grid indices.  The table
//! assigns slots in ascending index order, then swaps the station into slot
//! 0 — the engine contract fixes the source there.

use rustc_hash::FxHashMap;

use tt_graph::EdgeSet;
use tt_solver::SlotEdge;

use crate::error::{PathError, PathResult};

pub(crate) struct SlotTable {
    index_of_slot: Vec<i64>,
    slot_of_index: FxHashMap<i64, usize>,
}

impl SlotTable {
    /// Number the vertices of `edges` with `station_index` in slot 0.
    pub fn new(edges: &EdgeSet, station_index: i64) -> PathResult<Self> {
        let mut index_of_slot = edges.vertex_indices();
        let station_slot = index_of_slot
            .binary_search(&station_index)
            .map_err(|_| PathError::StationOutsideGraph)?;
        index_of_slot.swap(0, station_slot);
        let slot_of_index = index_of_slot
            .iter()
            .enumerate()
            .map(|(slot, &index)| (index, slot))
            .collect();
        Ok(Self { index_of_slot, slot_of_index })
    }

    pub fn len(&self) -> usize {
        self.index_of_slot.len()
    }

    /// Slot of a grid index, if the index is part of the graph.
    pub fn slot(&self, index: i64) -> Option<usize> {
        self.slot_of_index.get(&index).copied()
    }

    /// Grid index occupying `slot`.
    pub fn index(&self, slot: usize) -> i64 {
        self.index_of_slot[slot]
    }

    /// Renumber the edge set into slot space for the engine.
    pub fn slot_edges(&self, edges: &EdgeSet) -> Vec<SlotEdge> {
        edges
            .iter()
            .map(|e| SlotEdge {
                u: self.slot_of_index[&e.u],
                v: self.slot_of_index[&e.v],
                weight: e.weight,
            })
            .collect()
    }
}
