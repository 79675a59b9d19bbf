//! Crate error type
//!
//! Only startup can fail (configuration parsing and validation). The per-frame
//! simulation is infallible: degenerate geometry is skipped, not reported.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value out of range or inconsistent with another.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Config file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `SimConfig`.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
