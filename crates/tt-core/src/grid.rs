//! The normalized grid: a bijection between snapped locations and dense
//! integer vertex indices.
//!
//! # Design
//!
//! A location is snapped per axis to the stage's gap with half-up rounding,
//! then mapped to a single `i64`:
//!
//! ```text
//! idx = ((dep+10)/g_dep) · Nlon · Nlat  +  ((lat+90)/g_lat) · Nlon  +  ((lon+180)/g_lon)
//! ```
//!
//! where `Nlon = 360/g_lon + 1` and `Nlat = 180/g_lat + 1`.  Longitude is the
//! fastest-varying axis, so walking `idx + 1` moves one gap east, `idx + Nlon`
//! one gap north, and `idx + Nlon·Nlat` one gap down.  Depth has no upper
//! bound, so indices grow without limit downward but stay well inside `i64`
//! for any physical depth.
//!
//! # Numerical policy
//!
//! Snapping never rounds the raw `f64` directly: the coordinate is scaled by
//! the integer ticks-per-unit count, the scaled value is cleaned of binary
//! representation error, and only then is the half-up rule applied.  This
//! makes boundary inputs (e.g. `120.005` on a `0.01` gap) round
//! deterministically up, and guarantees `recover ∘ norm_index = snap`.

use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult};
use crate::loc::{Axis, Location};

/// Shallowest admitted depth, km.  Negative depths describe surface relief.
pub const MIN_DEP: f64 = -10.0;

/// Ticks per degree on the coarse lon/lat axes (gap 0.01°).
const COARSE_DEG_UNIT: i64 = 100;
/// Ticks per kilometre on the coarse depth axis (gap 1 km).
const COARSE_DEP_UNIT: i64 = 1;
/// Default refinement divisor between the coarse and fine stages.
const DEFAULT_REFINEMENT: i64 = 4;

// ── Stage ─────────────────────────────────────────────────────────────────────

/// Grid resolution selector for the two sweep stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Global sweep: gap (0.01°, 0.01°, 1 km).
    Coarse,
    /// Corridor sweep: coarse gap divided by the refinement factor.
    Fine,
}

// ── GridGap ───────────────────────────────────────────────────────────────────

/// Per-axis spacing of one stage: degrees for lon/lat, kilometres for depth.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGap {
    pub lon: f64,
    pub lat: f64,
    pub dep: f64,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Integer ticks-per-unit counts for one stage (per degree for lon/lat, per
/// kilometre for depth).  Holding the reciprocal of the gap as an integer is
/// what keeps snapping decimal-exact.
#[derive(Copy, Clone, Debug)]
struct AxisUnits {
    lon: i64,
    lat: i64,
    dep: i64,
}

/// The process-wide grid configuration.
///
/// Immutable after construction; every component takes it by shared
/// reference.  Use [`Grid::global`] for the default configuration — callers
/// expect a single grid per process, and constructing divergent grids for the
/// same travel-time computation breaks the index bijection between stages.
#[derive(Debug)]
pub struct Grid {
    coarse: AxisUnits,
    fine: AxisUnits,
}

static GLOBAL: LazyLock<Grid> = LazyLock::new(Grid::default);

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_REFINEMENT)
    }
}

impl Grid {
    /// A grid whose fine stage divides every coarse gap by `refinement`.
    ///
    /// # Panics
    /// Panics if `refinement < 1` — a static misconfiguration, not a runtime
    /// input.
    pub fn new(refinement: i64) -> Self {
        assert!(refinement >= 1, "grid refinement must be a positive integer");
        let coarse = AxisUnits {
            lon: COARSE_DEG_UNIT,
            lat: COARSE_DEG_UNIT,
            dep: COARSE_DEP_UNIT,
        };
        let fine = AxisUnits {
            lon: coarse.lon * refinement,
            lat: coarse.lat * refinement,
            dep: coarse.dep * refinement,
        };
        Self { coarse, fine }
    }

    /// The shared default grid (refinement 4).
    pub fn global() -> &'static Grid {
        &GLOBAL
    }

    #[inline]
    fn units(&self, stage: Stage) -> &AxisUnits {
        match stage {
            Stage::Coarse => &self.coarse,
            Stage::Fine => &self.fine,
        }
    }

    /// Per-axis gap of `stage`.
    pub fn gap(&self, stage: Stage) -> GridGap {
        let u = self.units(stage);
        GridGap {
            lon: 1.0 / u.lon as f64,
            lat: 1.0 / u.lat as f64,
            dep: 1.0 / u.dep as f64,
        }
    }

    /// Number of longitude ticks of `stage`: `360/gap + 1`.
    #[inline]
    pub fn num_lon(&self, stage: Stage) -> i64 {
        360 * self.units(stage).lon + 1
    }

    /// Number of latitude ticks of `stage`: `180/gap + 1`.
    #[inline]
    pub fn num_lat(&self, stage: Stage) -> i64 {
        180 * self.units(stage).lat + 1
    }

    /// Snap `loc` to the nearest grid point of `stage`, rounding half-up per
    /// axis.  Snapping is idempotent: a snapped location snaps to itself.
    pub fn snap(&self, loc: Location, stage: Stage) -> CoreResult<Location> {
        check_range(loc)?;
        let u = self.units(stage);
        Ok(Location {
            lon: half_up_steps(loc.lon, u.lon) as f64 / u.lon as f64,
            lat: half_up_steps(loc.lat, u.lat) as f64 / u.lat as f64,
            dep: half_up_steps(loc.dep, u.dep) as f64 / u.dep as f64,
        })
    }

    /// Snap `loc` and return its dense vertex index under `stage`.
    pub fn norm_index(&self, loc: Location, stage: Stage) -> CoreResult<i64> {
        check_range(loc)?;
        let u = self.units(stage);
        let lon_steps = half_up_steps(loc.lon, u.lon) + 180 * u.lon;
        let lat_steps = half_up_steps(loc.lat, u.lat) + 90 * u.lat;
        let dep_steps = half_up_steps(loc.dep, u.dep) + 10 * u.dep;
        let num_lon = self.num_lon(stage);
        let num_lat = self.num_lat(stage);
        Ok(dep_steps * num_lon * num_lat + lat_steps * num_lon + lon_steps)
    }

    /// Inverse of [`norm_index`](Self::norm_index) on snapped points:
    /// `recover(norm_index(loc)) == snap(loc)` for every in-range `loc`.
    pub fn recover(&self, idx: i64, stage: Stage) -> Location {
        let u = self.units(stage);
        let num_lon = self.num_lon(stage);
        let plane = num_lon * self.num_lat(stage);
        let dep_steps = idx.div_euclid(plane);
        let rem = idx.rem_euclid(plane);
        let lat_steps = rem / num_lon;
        let lon_steps = rem % num_lon;
        // Same integer-over-integer division as `snap`, so the round trip is
        // exact rather than merely within tolerance.
        Location {
            lon: (lon_steps - 180 * u.lon) as f64 / u.lon as f64,
            lat: (lat_steps - 90 * u.lat) as f64 / u.lat as f64,
            dep: (dep_steps - 10 * u.dep) as f64 / u.dep as f64,
        }
    }
}

// ── Rounding ──────────────────────────────────────────────────────────────────

/// Number of whole ticks in `value`, rounding half-up (toward +∞).
///
/// The scaled value is first rounded to nine decimals so that a coordinate
/// written with a short decimal expansion lands exactly on its tick even
/// when the binary `f64` sits a hair below it.
fn half_up_steps(value: f64, unit: i64) -> i64 {
    let scaled = value * unit as f64;
    let scaled = (scaled * 1e9).round() / 1e9;
    (scaled + 0.5).floor() as i64
}

fn check_range(loc: Location) -> CoreResult<()> {
    if !(-180.0..=180.0).contains(&loc.lon) {
        return Err(CoreError::OutOfRange { axis: Axis::Lon, value: loc.lon });
    }
    if !(-90.0..=90.0).contains(&loc.lat) {
        return Err(CoreError::OutOfRange { axis: Axis::Lat, value: loc.lat });
    }
    if loc.dep < MIN_DEP {
        return Err(CoreError::OutOfRange { axis: Axis::Dep, value: loc.dep });
    }
    Ok(())
}
