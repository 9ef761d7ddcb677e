//! `tt-core` — foundational types for the seismic travel-time solver.
//!
//! This crate is a dependency of every other `tt-*` crate.  It intentionally
//! has no `tt-*` dependencies and minimal external ones (only `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`loc`]      | `Location`, `Axis`                                     |
//! | [`grid`]     | `Stage`, `Grid` (snap / index / recover bijection)     |
//! | [`geodesic`] | shift-longitude centering, geocentric chord distance   |
//! | [`error`]    | `CoreError`, `CoreResult`                              |

pub mod error;
pub mod geodesic;
pub mod grid;
pub mod loc;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geodesic::{EARTH_RADIUS_KM, distance, shift_lon};
pub use grid::{Grid, GridGap, Stage};
pub use loc::{Axis, Location};
