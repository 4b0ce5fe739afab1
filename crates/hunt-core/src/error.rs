//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HuntError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::GeoPoint;

/// The base error type shared by the `hunt-*` crates.
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("non-finite coordinate {0}")]
    NonFiniteCoordinate(GeoPoint),
}

/// Shorthand result type for all `hunt-*` crates.
pub type HuntResult<T> = Result<T, HuntError>;
