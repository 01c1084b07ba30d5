//! Error types for agro-app.

use agro_core::errors::CoreError;
use agro_store::StoreError;
use thiserror::Error;

/// Message shown in place of page data when a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Something went wrong while loading this page.";

/// Message shown when a load fails because the addressed record is gone.
pub const NOT_FOUND_MESSAGE: &str = "The requested item could not be found.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A required form field was empty; raised before any store mutation.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid route '{0}': paths start with '/'")]
    Route(String),

    #[error("Failed to render view: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The message a failed page load shows. Details stay in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Store(e) if e.is_not_found() => NOT_FOUND_MESSAGE,
            _ => LOAD_FAILED_MESSAGE,
        }
    }
}
