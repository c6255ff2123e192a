//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where configuration problems can surface.

use thiserror::Error;

/// Errors raised by `rat-core` itself (currently only config validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rat-core`.
pub type CoreResult<T> = Result<T, CoreError>;
