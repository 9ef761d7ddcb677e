//! Geographic location type shared by every `tt-*` crate.
//!
//! Coordinates are `f64` throughout: the normalized grid distinguishes points
//! 0.0025° apart (roughly 250 m), which is far below `f32` resolution once
//! longitudes reach three digits.

use std::fmt;

/// One of the three coordinate axes.  Used in error reporting and when a
/// caller needs to address a `Location` component generically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Lon,
    Lat,
    Dep,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Lon => write!(f, "longitude"),
            Axis::Lat => write!(f, "latitude"),
            Axis::Dep => write!(f, "depth"),
        }
    }
}

/// A geographic point: degrees east, degrees north, and kilometres below sea
/// level.  Depth is positive underground; values down to −10 km describe
/// stations above sea level (surface relief).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
    pub dep: f64,
}

impl Location {
    #[inline]
    pub fn new(lon: f64, lat: f64, dep: f64) -> Self {
        Self { lon, lat, dep }
    }

    /// The component along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::Lon => self.lon,
            Axis::Lat => self.lat,
            Axis::Dep => self.dep,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.3} km)", self.lon, self.lat, self.dep)
    }
}
