//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as a source
//! where a core failure needs extra context (e.g. which facility was bad).

use thiserror::Error;

/// Errors produced by `fl-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `fl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
