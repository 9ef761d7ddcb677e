//! Chord distance between nearby points inside the Earth.
//!
//! Edge lengths in the travel-time graph are short (a few grid gaps), so the
//! metric is the straight-line chord between the two points' Cartesian
//! positions on a sphere of radius `R − dep`, with geographic latitude first
//! converted to geocentric latitude to account for the Earth's flattening.
//!
//! Longitudes are measured from a per-pair *shift longitude* — an origin
//! placed on the midpoint of the short arc between station and source — so
//! that a pair straddling the antimeridian never subtracts two nearly-equal
//! large angles.

use crate::loc::Location;

/// Reference Earth radius handed to [`distance`] by the graph builder, km.
pub const EARTH_RADIUS_KM: f64 = 6374.7524414062500;

const RAD_PER_DEG: f64 = 0.0174532925199432955;
/// Degrees per radian, written as the legacy `90/asin(1)` form.
const R2D: f64 = 90.0 / std::f64::consts::FRAC_PI_2;
/// Squared polar-to-equatorial axis ratio of the Earth ellipsoid.
const B2A_SQ: f64 = 0.993305521;

/// Geographic → geocentric latitude, both in degrees.
fn geocentric_lat(lat: f64) -> f64 {
    (B2A_SQ * (RAD_PER_DEG * lat).tan()).atan() / RAD_PER_DEG
}

/// Cartesian position of `p` on the sphere of radius `radius − dep`, with
/// the longitude origin rotated to `shift_lon`.
fn cartesian(p: Location, shift_lon: f64, radius: f64) -> [f64; 3] {
    let theta = (90.0 - geocentric_lat(p.lat)) / R2D;
    let r = radius - p.dep;
    let phi = (p.lon - shift_lon) / R2D;
    [
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    ]
}

/// Chord distance in kilometres between `p1` and `p2`.
///
/// `shift_lon` must come from [`shift_lon`] for the pair being processed (or
/// any fixed origin near both points); the result is invariant under a common
/// longitude rotation, so the shift affects conditioning only.
pub fn distance(p1: Location, p2: Location, shift_lon: f64, radius: f64) -> f64 {
    let a = cartesian(p1, shift_lon, radius);
    let b = cartesian(p2, shift_lon, radius);
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Longitude origin for a station/source pair.
///
/// Both longitudes are first mapped to `(0, 360]`; the origin is then chosen
/// so that the pair sits symmetrically inside one continuous 180° arc.  When
/// the direct difference exceeds 180° the pair straddles the antimeridian and
/// the short arc through 360° is used instead.
pub fn shift_lon(station: Location, source: Location) -> f64 {
    let sta = if station.lon > 0.0 { station.lon } else { 360.0 + station.lon };
    let sou = if source.lon > 0.0 { source.lon } else { 360.0 + source.lon };
    let diff = (sou - sta).abs();
    if diff <= 180.0 {
        let west = if sou <= sta { sou } else { sta };
        west - (180.0 - diff) / 2.0
    } else {
        let diff = 360.0 - diff;
        let west = if sou <= sta { sou } else { sta };
        west - (diff + (180.0 - diff) / 2.0)
    }
}
