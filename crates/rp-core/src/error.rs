//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `rp-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid traffic multiplier {value} for {key}")]
    InvalidMultiplier { key: String, value: f64 },

    #[error("invalid edge key {0:?}: expected \"u-v\"")]
    InvalidKey(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
