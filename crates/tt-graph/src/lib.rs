//! `tt-graph` — travel-time graph construction.
//!
//! Turns a station/source pair (and, for the fine stage, a corridor of path
//! points) into the set of undirected weighted edges covering the search
//! region.  Edge weights are trapezoidal-rule travel times: segment length
//! times the mean slowness of its two endpoints.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`edge`]     | `Edge`, deduplicating `EdgeSet`                       |
//! | [`corridor`] | `Extent`, corridor boxes, index-space `BoundaryBox`   |
//! | [`builder`]  | `GraphBuilder`, `BuilderConfig`, neighbor offsets     |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                        |

pub mod builder;
pub mod corridor;
pub mod edge;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::{BuilderConfig, GraphBuilder};
pub use corridor::Extent;
pub use edge::{Edge, EdgeSet};
pub use error::{GraphError, GraphResult};
