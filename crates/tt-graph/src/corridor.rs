//! Corridor geometry: the axis-aligned boxes a sweep covers and their
//! index-space boundaries.
//!
//! A corridor is a union of boxes.  The coarse stage uses a single box
//! spanning station and source; the fine stage centres one box on every
//! point of the coarse shortest path.  Each box is characterised in index
//! space by four corner indices whose pairwise differences are exact
//! multiples of the axis strides, which lets the in-boundary test work on
//! bare integers with no coordinate recovery.

use tt_core::grid::MIN_DEP;
use tt_core::{Grid, Location, Stage};

use crate::error::GraphResult;

/// A per-axis extent: degrees for lon/lat, kilometres for depth.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    pub lon: f64,
    pub lat: f64,
    pub dep: f64,
}

impl Extent {
    pub const ZERO: Extent = Extent { lon: 0.0, lat: 0.0, dep: 0.0 };

    pub fn new(lon: f64, lat: f64, dep: f64) -> Self {
        Self { lon, lat, dep }
    }
}

/// Clamp a box corner to the admitted geographic range so padding applied
/// near a boundary cannot push an index query out of range.
fn clamp(loc: Location) -> Location {
    Location {
        lon: loc.lon.clamp(-180.0, 180.0),
        lat: loc.lat.clamp(-90.0, 90.0),
        dep: loc.dep.max(MIN_DEP),
    }
}

/// The coarse-stage box: endpoints ordered per axis, lon/lat padded on both
/// sides by `extra`, depth padded downward only — the coarse sweep never
/// looks above the shallower endpoint.
pub(crate) fn coarse_box(sta: Location, sou: Location, extra: Extent) -> (Location, Location) {
    let lo = Location {
        lon: sta.lon.min(sou.lon) - extra.lon,
        lat: sta.lat.min(sou.lat) - extra.lat,
        dep: sta.dep.min(sou.dep),
    };
    let hi = Location {
        lon: sta.lon.max(sou.lon) + extra.lon,
        lat: sta.lat.max(sou.lat) + extra.lat,
        dep: sta.dep.max(sou.dep) + extra.dep,
    };
    (clamp(lo), clamp(hi))
}

/// One fine-stage box per corridor point: `[p − ranges/2, p + ranges/2]`.
pub(crate) fn fine_boxes(path: &[Location], ranges: Extent) -> Vec<(Location, Location)> {
    path.iter()
        .map(|p| {
            let lo = Location {
                lon: p.lon - ranges.lon / 2.0,
                lat: p.lat - ranges.lat / 2.0,
                dep: p.dep - ranges.dep / 2.0,
            };
            let hi = Location {
                lon: p.lon + ranges.lon / 2.0,
                lat: p.lat + ranges.lat / 2.0,
                dep: p.dep + ranges.dep / 2.0,
            };
            (clamp(lo), clamp(hi))
        })
        .collect()
}

// ── BoundaryBox ───────────────────────────────────────────────────────────────

/// One corridor box in index space.
///
/// The four corners satisfy `min ≤ lon_max ≤ lon_lat_max ≤ max`;
/// `lon_max − min` is the box's longitude span, `lon_lat_max − lon_max` its
/// latitude span in units of `Nlon`, and `max − lon_lat_max` its depth span
/// in units of `Nlon · Nlat`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BoundaryBox {
    pub idx_min: i64,
    pub idx_lon_max: i64,
    pub idx_lon_lat_max: i64,
    pub idx_max: i64,
}

impl BoundaryBox {
    pub fn new(grid: &Grid, lo: Location, hi: Location, stage: Stage) -> GraphResult<Self> {
        let idx_min = grid.norm_index(lo, stage)?;
        let idx_lon_max =
            grid.norm_index(Location::new(hi.lon, lo.lat, lo.dep), stage)?;
        let idx_lon_lat_max =
            grid.norm_index(Location::new(hi.lon, hi.lat, lo.dep), stage)?;
        let idx_max = grid.norm_index(hi, stage)?;
        Ok(Self { idx_min, idx_lon_max, idx_lon_lat_max, idx_max })
    }

    /// Whether `idx` names a grid point inside this box.
    ///
    /// The linear range check alone admits indices that wrap to the next
    /// latitude row or depth plane; the two modular clauses reject those.
    pub fn contains(&self, idx: i64, num_lon: i64, num_lat: i64) -> bool {
        if idx < self.idx_min || idx > self.idx_max {
            return false;
        }
        let plane = num_lon * num_lat;
        let in_plane = idx % plane;
        if in_plane < self.idx_min % plane || in_plane > self.idx_lon_lat_max % plane {
            return false;
        }
        let in_row = in_plane % num_lon;
        in_row >= self.idx_min % num_lon && in_row <= self.idx_lon_max % num_lon
    }
}
