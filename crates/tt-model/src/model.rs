//! Velocity-model representation and lookup.
//!
//! # File format
//!
//! Plain text, whitespace separated (canonical file name `MOD_H13`):
//!
//! ```text
//! line 1:  _ _ Nlon Nlat Ndep        (first two fields ignored)
//! line 2:  Nlon longitudes
//! line 3:  Nlat latitudes
//! line 4:  Ndep depths
//! then Ndep × Nlat lines, each with Nlon speeds (km/s); the row for depth
//! index id and latitude index ia holds the longitude sweep.
//! ```
//!
//! Axis ticks need not be uniformly spaced, but must be monotone
//! non-decreasing.  Any dimension mismatch is a hard error.
//!
//! # Interpolation
//!
//! `speed` locates the enclosing cell by right-bisection per axis and blends
//! the eight corner speeds with axis-proportional trilinear weights.  The
//! fractions are taken along each axis in its own unit — not as physical
//! distances — so interpolation commutes with axis scaling and reproduces the
//! stored value exactly at grid points.  A zero-width cell (duplicate tick)
//! collapses that dimension onto the lower corner.

use std::io::BufRead;
use std::path::Path;

use tt_core::Location;

use crate::error::{ModelError, ModelResult};

/// A regular 3D grid of seismic speeds with independent axis vectors.
///
/// Immutable after construction and safe to share by reference.
#[derive(Debug)]
pub struct VelocityModel {
    lons: Vec<f64>,
    lats: Vec<f64>,
    deps: Vec<f64>,
    /// Dense speeds, longitude fastest: `(id · Nlat + ia) · Nlon + il`.
    speeds: Vec<f64>,
}

impl VelocityModel {
    /// Parse a model from a file on disk.
    pub fn from_path(path: &Path) -> ModelResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file), &path.display().to_string())
    }

    /// Parse a model from any buffered reader; `name` is used in errors.
    pub fn from_reader<R: BufRead>(reader: R, name: &str) -> ModelResult<Self> {
        let malformed = |reason: String| ModelError::Malformed {
            file: name.to_string(),
            reason,
        };

        let mut lines = reader.lines();
        let mut next_row = |what: &str| -> ModelResult<Vec<f64>> {
            let line = lines
                .next()
                .ok_or_else(|| malformed(format!("unexpected end of file reading {what}")))??;
            line.split_whitespace()
                .map(|tok| {
                    tok.parse::<f64>()
                        .map_err(|_| malformed(format!("bad number {tok:?} in {what}")))
                })
                .collect()
        };

        let header = next_row("header")?;
        if header.len() < 5 {
            return Err(malformed(format!(
                "header has {} fields, expected 5",
                header.len()
            )));
        }
        let num_lon = header[2] as usize;
        let num_lat = header[3] as usize;
        let num_dep = header[4] as usize;
        if num_lon == 0 || num_lat == 0 || num_dep == 0 {
            return Err(malformed("zero-length axis in header".to_string()));
        }

        let lons = next_row("longitude axis")?;
        let lats = next_row("latitude axis")?;
        let deps = next_row("depth axis")?;
        for (axis, ticks, expected) in [
            ("longitude", &lons, num_lon),
            ("latitude", &lats, num_lat),
            ("depth", &deps, num_dep),
        ] {
            if ticks.len() != expected {
                return Err(malformed(format!(
                    "{axis} axis has {} ticks, header declares {expected}",
                    ticks.len()
                )));
            }
            if ticks.windows(2).any(|w| w[1] < w[0]) {
                return Err(malformed(format!("{axis} axis is not monotone")));
            }
        }

        let mut speeds = Vec::with_capacity(num_lon * num_lat * num_dep);
        for id in 0..num_dep {
            for ia in 0..num_lat {
                let row = next_row("speed row")?;
                if row.len() != num_lon {
                    return Err(malformed(format!(
                        "speed row (dep {id}, lat {ia}) has {} values, expected {num_lon}",
                        row.len()
                    )));
                }
                if let Some(bad) = row.iter().find(|v| **v < 0.0) {
                    return Err(malformed(format!(
                        "negative speed {bad} (dep {id}, lat {ia})"
                    )));
                }
                speeds.extend_from_slice(&row);
            }
        }

        Ok(Self { lons, lats, deps, speeds })
    }

    /// Axis cardinalities `(Nlon, Nlat, Ndep)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.lons.len(), self.lats.len(), self.deps.len())
    }

    #[inline]
    fn at(&self, il: usize, ia: usize, id: usize) -> f64 {
        self.speeds[(id * self.lats.len() + ia) * self.lons.len() + il]
    }

    /// Interpolated speed (km/s) at `loc`.
    ///
    /// Fails with [`ModelError::OutOfModel`] when any coordinate falls
    /// outside its axis span.
    pub fn speed(&self, loc: Location) -> ModelResult<f64> {
        let out = || ModelError::OutOfModel(loc);
        let lon = axis_cell(&self.lons, loc.lon).ok_or_else(out)?;
        let lat = axis_cell(&self.lats, loc.lat).ok_or_else(out)?;
        let dep = axis_cell(&self.deps, loc.dep).ok_or_else(out)?;

        let mut speed = 0.0;
        for corner in 0..8u32 {
            let (il, wl) = lon.corner((corner & 1) != 0);
            let (ia, wa) = lat.corner((corner & 2) != 0);
            let (id, wd) = dep.corner((corner & 4) != 0);
            speed += self.at(il, ia, id) * wl * wa * wd;
        }
        Ok(speed)
    }
}

// ── Cell location ─────────────────────────────────────────────────────────────

/// The enclosing cell on one axis: lower/upper tick indices and the
/// axis-proportional fraction of the query point between them.
#[derive(Copy, Clone)]
struct AxisCell {
    lo: usize,
    hi: usize,
    frac: f64,
}

impl AxisCell {
    /// Tick index and weight of the lower (`false`) or upper (`true`) corner.
    #[inline]
    fn corner(self, upper: bool) -> (usize, f64) {
        if upper {
            (self.hi, self.frac)
        } else {
            (self.lo, 1.0 - self.frac)
        }
    }
}

/// Right-bisect `x` into `axis`, clamped so the upper tick stays in range.
/// Returns `None` outside the axis span.
fn axis_cell(axis: &[f64], x: f64) -> Option<AxisCell> {
    let last = *axis.last()?;
    if x < axis[0] || x > last {
        return None;
    }
    if axis.len() == 1 {
        return Some(AxisCell { lo: 0, hi: 0, frac: 0.0 });
    }
    let upper = axis.partition_point(|&tick| tick <= x);
    let lo = upper.saturating_sub(1).min(axis.len() - 2);
    let span = axis[lo + 1] - axis[lo];
    let frac = if span > 0.0 { (x - axis[lo]) / span } else { 0.0 };
    Some(AxisCell { lo, hi: lo + 1, frac })
}
