//! `tt-output` — result export and the persisted travel-time store.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`path_csv`] | fixed-width path export, weights-CSV reader                |
//! | [`store`]    | `TravelTimeStore` (SQLite, feature `sqlite`)               |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                           |
//!
//! The path export keeps the byte-exact legacy layout (right-aligned
//! 12-decimal fields, comma+space separated) so downstream consumers of the
//! historical files keep working; reading uses the `csv` crate with
//! whitespace trimming.

pub mod error;
pub mod path_csv;

#[cfg(feature = "sqlite")]
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use path_csv::{PathWeights, read_weights_csv, write_path};

#[cfg(feature = "sqlite")]
pub use store::TravelTimeStore;
