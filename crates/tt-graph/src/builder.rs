//! The graph builder: enumerate corridor vertices and emit weighted edges.
//!
//! # Sweep order
//!
//! Each box is walked longitude-fastest: along a longitude row, stepping
//! `Nlon` per latitude row, stepping `Nlon · Nlat` per depth plane.  For each
//! base vertex every neighbor offset is tried; an offset landing outside the
//! box contributes nothing.  The sweep is deterministic, but the result is a
//! set — only its contents are observable.
//!
//! # Neighbor offsets
//!
//! The coarse stage connects the 26-neighborhood restricted to non-negative
//! depth steps (the coarse sweep never looks upward); the fine stage extends
//! to ±2 gaps in lon/lat and 0..2 gaps downward, 74 offsets in total.

use tt_core::{EARTH_RADIUS_KM, Grid, Location, Stage, distance, shift_lon};
use tt_model::VelocityModel;

use crate::corridor::{BoundaryBox, Extent, coarse_box, fine_boxes};
use crate::edge::EdgeSet;
use crate::error::{GraphError, GraphResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Corridor sizing for the two stages.
#[derive(Copy, Clone, Debug)]
pub struct BuilderConfig {
    /// Lon/lat padding on both sides of the coarse box, plus downward depth
    /// padding, applied beyond the station/source span.
    pub extra_range: Extent,
    /// Full size of each fine-stage box centred on a corridor point.
    pub ranges: Extent,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            extra_range: Extent::new(0.02, 0.02, 20.0),
            ranges: Extent::new(0.05, 0.05, 2.0),
        }
    }
}

/// Per-box sweep parameters threaded through edge creation.
#[derive(Copy, Clone, Debug)]
struct SweepContext {
    shift_lon: f64,
    stage: Stage,
    num_lon: i64,
    num_lat: i64,
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Builds the edge set for one stage of the travel-time search.
///
/// Holds the shared grid and a velocity model by reference; one builder can
/// serve both stages of a computation and any number of station/source
/// pairs.
pub struct GraphBuilder<'m> {
    grid: &'static Grid,
    model: &'m VelocityModel,
    config: BuilderConfig,
}

impl<'m> GraphBuilder<'m> {
    /// Builder with the default corridor sizing.
    pub fn new(model: &'m VelocityModel) -> Self {
        Self::with_config(model, BuilderConfig::default())
    }

    pub fn with_config(model: &'m VelocityModel, config: BuilderConfig) -> Self {
        Self { grid: Grid::global(), model, config }
    }

    /// Build the undirected edge set covering the stage's corridor.
    ///
    /// `path` must be `None` for [`Stage::Coarse`] and a non-empty slice of
    /// corridor centre points (normally the coarse shortest path) for
    /// [`Stage::Fine`].
    pub fn build(
        &self,
        sta: Location,
        sou: Location,
        stage: Stage,
        path: Option<&[Location]>,
    ) -> GraphResult<EdgeSet> {
        if sta == sou {
            return Err(GraphError::CoincidentEndpoints);
        }

        // (shift-origin pair, box corners) per corridor box.  Snapping the
        // shift pair also validates that the endpoints are in range before
        // any clamped box corner could mask the violation.
        let boxes: Vec<((Location, Location), (Location, Location))> = match (stage, path) {
            (Stage::Coarse, None) => {
                let corners = coarse_box(sta, sou, self.config.extra_range);
                vec![((sta, sou), corners)]
            }
            (Stage::Coarse, Some(_)) => return Err(GraphError::UnexpectedPath),
            (Stage::Fine, Some(path)) if !path.is_empty() => fine_boxes(path, self.config.ranges)
                .into_iter()
                .map(|corners| (corners, corners))
                .collect(),
            (Stage::Fine, _) => return Err(GraphError::EmptyCorridor),
        };

        let num_lon = self.grid.num_lon(stage);
        let num_lat = self.grid.num_lat(stage);
        let incs = neighbor_offsets(stage, num_lon, num_lat);

        let mut edges = EdgeSet::new();
        for ((shift_a, shift_b), (lo, hi)) in boxes {
            let ctx = SweepContext {
                shift_lon: shift_lon(self.grid.snap(shift_a, stage)?, self.grid.snap(shift_b, stage)?),
                stage,
                num_lon,
                num_lat,
            };
            let bnd = BoundaryBox::new(self.grid, lo, hi, stage)?;
            self.sweep_box(&mut edges, &bnd, &incs, ctx);
        }
        Ok(edges)
    }

    /// Walk every base vertex of one box and try all neighbor offsets.
    fn sweep_box(&self, edges: &mut EdgeSet, bnd: &BoundaryBox, incs: &[i64], ctx: SweepContext) {
        let plane = ctx.num_lon * ctx.num_lat;
        let mut dep_off = 0;
        while dep_off <= bnd.idx_max - bnd.idx_lon_lat_max {
            let mut lat_off = 0;
            while lat_off <= bnd.idx_lon_lat_max - bnd.idx_lon_max {
                let row = bnd.idx_min + lat_off + dep_off..=bnd.idx_lon_max + lat_off + dep_off;
                for idx in row {
                    self.connect(edges, idx, bnd, incs, ctx);
                }
                lat_off += ctx.num_lon;
            }
            dep_off += plane;
        }
    }

    /// Create the edges from one base vertex to every in-box neighbor.
    ///
    /// A neighbor outside the velocity model, or with non-positive speed,
    /// yields an infinite travel time — the edge is simply omitted.
    fn connect(&self, edges: &mut EdgeSet, idx: i64, bnd: &BoundaryBox, incs: &[i64], ctx: SweepContext) {
        for &inc in incs {
            let adj = idx + inc;
            if !bnd.contains(adj, ctx.num_lon, ctx.num_lat) {
                continue;
            }
            if edges.contains_pair(idx, adj) {
                continue;
            }
            let loc = self.grid.recover(idx, ctx.stage);
            let loc_adj = self.grid.recover(adj, ctx.stage);
            let (Ok(v1), Ok(v2)) = (self.model.speed(loc), self.model.speed(loc_adj)) else {
                continue;
            };
            if v1 <= 0.0 || v2 <= 0.0 {
                continue;
            }
            let dist = distance(loc, loc_adj, ctx.shift_lon, EARTH_RADIUS_KM);
            edges.insert(idx, adj, dist * (1.0 / v1 + 1.0 / v2) * 0.5);
        }
    }
}

// ── Neighbor offsets ──────────────────────────────────────────────────────────

/// Integer index deltas of the stage's neighborhood, zero excluded.
///
/// Coarse: `3·3·2 − 1 = 17` offsets; fine: `5·5·3 − 1 = 74`.
pub(crate) fn neighbor_offsets(stage: Stage, num_lon: i64, num_lat: i64) -> Vec<i64> {
    let (lateral, downward): (i64, i64) = match stage {
        Stage::Coarse => (1, 1),
        Stage::Fine => (2, 2),
    };
    let plane = num_lon * num_lat;
    let mut incs = Vec::with_capacity(((2 * lateral + 1) * (2 * lateral + 1) * (downward + 1) - 1) as usize);
    for c_dep in 0..=downward {
        for c_lat in -lateral..=lateral {
            for c_lon in -lateral..=lateral {
                let delta = c_lon + c_lat * num_lon + c_dep * plane;
                if delta != 0 {
                    incs.push(delta);
                }
            }
        }
    }
    incs
}

#[cfg(test)]
pub(crate) use neighbor_offsets as offsets;
