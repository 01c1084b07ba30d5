//! Cross-cutting error types for agrodash.
//!
//! Storage failures live in `agro-store` (`StoreError`) and controller
//! failures in `agro-app` (`AppError`). This module only covers what any
//! crate can raise while interpreting raw values.

use thiserror::Error;

/// Errors that can be raised by any agrodash crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A raw string did not name a member of a closed enumeration.
    #[error("Invalid {field} '{value}'")]
    InvalidValue { field: String, value: String },

    /// Data failed validation (required field empty, out-of-range value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
