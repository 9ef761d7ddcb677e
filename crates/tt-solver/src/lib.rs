//! `tt-solver` — shortest-path engines over slot-numbered graphs.
//!
//! The driver hands an engine a list of undirected weighted edges whose
//! vertices have been renumbered into contiguous *slots* with the station at
//! slot 0.  Engines are pluggable behind the [`PathEngine`] trait:
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`engine`]  | `SlotEdge`, `SolveOutcome`, the `PathEngine` trait      |
//! | [`dijkstra`]| `DijkstraEngine` — in-process binary-heap Dijkstra      |
//! | [`edgefile`]| the legacy text hand-off format (write + read)          |
//! | [`external`]| `ExternalEngine` — subprocess with JSON stdout          |
//! | [`error`]   | `SolverError`, `SolverResult<T>`                        |

pub mod dijkstra;
pub mod edgefile;
pub mod engine;
pub mod error;
pub mod external;


pub use dijkstra::DijkstraEngine;
pub use engine::{PathEngine, SlotEdge, SolveOutcome};
pub use error::{SolverError, SolverResult};
pub use external::ExternalEngine;
