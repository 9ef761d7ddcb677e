//! `tt-path` — the two-stage shortest-path driver.
//!
//! Composes the graph builder and a path engine into the full computation:
//! a coarse global sweep recovers an approximate ray path, then a fine graph
//! built only inside a tube around that path yields the final travel time.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`driver`]   | `ShortestPath`, `TravelTime`                          |
//! | [`vertices`] | slot numbering with the station pinned to slot 0      |
//! | [`bending`]  | `BendingOracle` — the pseudo-bending alternative      |
//! | [`error`]    | `PathError`, `PathResult<T>`                          |

pub mod bending;
pub mod driver;
pub mod error;

mod vertices;


pub use bending::BendingOracle;
pub use driver::{ShortestPath, TravelTime};
pub use error::{PathError, PathResult};
