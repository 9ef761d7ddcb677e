//! The two-stage shortest-path driver.
//!
//! # Stages
//!
//! 1. Build the coarse graph spanning station and source; solve it.
//! 2. Recover the coarse slot path into coordinates — the corridor.
//! 3. Build the fine graph inside the corridor tube; solve it.
//! 4. Expose the fine travel time, the station→source path, and the
//!    per-vertex travel times keyed by fine grid index.
//!
//! Each step short-circuits on error; stage-1 results live only long enough
//! to seed stage 2.  Edge sets are dropped as soon as their engine call
//! returns.

use std::path::Path;

use rustc_hash::FxHashMap;

use tt_core::{Grid, Location, Stage};
use tt_graph::{BuilderConfig, EdgeSet, GraphBuilder};
use tt_model::VelocityModel;
use tt_solver::{DijkstraEngine, PathEngine, SolveOutcome};

use crate::error::{PathError, PathResult};
use crate::vertices::SlotTable;

// ── TravelTime ────────────────────────────────────────────────────────────────

/// The result of one completed two-stage computation.
#[derive(Debug)]
pub struct TravelTime {
    /// First-arrival travel time from station to source, seconds.
    pub seconds: f64,
    /// Fine-stage shortest path, ordered station → source.
    pub path: Vec<Location>,
    /// Shortest travel time from the station to every fine-graph vertex,
    /// keyed by grid index; `f64::INFINITY` for unreached vertices.
    pub vertex_weights: FxHashMap<i64, f64>,
}

impl TravelTime {
    /// Travel time to one fine-grid vertex, if it was part of the graph.
    pub fn weight_at(&self, index: i64) -> Option<f64> {
        self.vertex_weights.get(&index).copied()
    }

    /// Export the path in the legacy fixed-width CSV layout.
    pub fn export_path(&self, file: &Path) -> PathResult<()> {
        tt_output::write_path(file, &self.path)?;
        Ok(())
    }
}

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// Two-stage travel-time driver over a velocity model and a path engine.
pub struct ShortestPath<'m, E = DijkstraEngine> {
    builder: GraphBuilder<'m>,
    engine: E,
    grid: &'static Grid,
}

impl<'m> ShortestPath<'m, DijkstraEngine> {
    /// Driver with the default corridor sizing and the in-process engine.
    pub fn new(model: &'m VelocityModel) -> Self {
        Self::with_config(model, BuilderConfig::default())
    }

    pub fn with_config(model: &'m VelocityModel, config: BuilderConfig) -> Self {
        Self::with_engine(model, config, DijkstraEngine)
    }
}

impl<'m, E: PathEngine> ShortestPath<'m, E> {
    /// Driver with a caller-supplied engine (e.g. an external executable).
    pub fn with_engine(model: &'m VelocityModel, config: BuilderConfig, engine: E) -> Self {
        Self {
            builder: GraphBuilder::with_config(model, config),
            engine,
            grid: Grid::global(),
        }
    }

    /// Run both stages and return the fine-stage result.
    pub fn run(&self, sta: Location, sou: Location) -> PathResult<TravelTime> {
        // Stage 1: coarse sweep over the endpoint box.
        let edges = self.builder.build(sta, sou, Stage::Coarse, None)?;
        let (outcome, slots) = self.solve(&edges, sta, sou, Stage::Coarse)?;
        drop(edges);

        // The coarse shortest path becomes the fine corridor.
        let corridor: Vec<Location> = outcome
            .shortest_path
            .iter()
            .map(|&slot| self.grid.recover(slots.index(slot), Stage::Coarse))
            .collect();

        // Stage 2: fine sweep restricted to the corridor tube.
        let edges = self.builder.build(sta, sou, Stage::Fine, Some(&corridor))?;
        let (outcome, slots) = self.solve(&edges, sta, sou, Stage::Fine)?;
        drop(edges);

        // The engine reports the path sink-first; expose it station-first.
        let mut path: Vec<Location> = outcome
            .shortest_path
            .iter()
            .map(|&slot| self.grid.recover(slots.index(slot), Stage::Fine))
            .collect();
        path.reverse();

        let vertex_weights = outcome
            .vertex_weights
            .iter()
            .enumerate()
            .map(|(slot, &weight)| (slots.index(slot), weight))
            .collect();

        Ok(TravelTime { seconds: outcome.shortest_weight, path, vertex_weights })
    }

    /// Number the vertices, pin the station to slot 0, and run the engine.
    fn solve(
        &self,
        edges: &EdgeSet,
        sta: Location,
        sou: Location,
        stage: Stage,
    ) -> PathResult<(SolveOutcome, SlotTable)> {
        let slots = SlotTable::new(edges, self.grid.norm_index(sta, stage)?)?;
        let sink = slots
            .slot(self.grid.norm_index(sou, stage)?)
            .ok_or(PathError::SourceOutsideGraph)?;
        let outcome = self.engine.solve(&slots.slot_edges(edges), slots.len(), sink)?;
        Ok((outcome, slots))
    }
}
