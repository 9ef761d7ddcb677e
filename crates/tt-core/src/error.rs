//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, keeping error sites clean.

use thiserror::Error;

use crate::loc::Axis;

/// Errors produced by `tt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A coordinate fell outside the admitted geographic range
    /// `[−180, 180]° × [−90, 90]° × [−10, ∞) km`.
    #[error("{axis} {value} is outside the admitted grid range")]
    OutOfRange { axis: Axis, value: f64 },
}

/// Shorthand result type for `tt-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
