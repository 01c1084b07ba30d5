//! Store error types for agro-store.

use agro_core::enums::{Counter, EntityType};
use thiserror::Error;

/// Errors from data access operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given ID exists in the collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityType, id: String },

    /// The entity has no such engagement counter.
    #[error("{entity} has no counter '{counter}'")]
    UnknownCounter { entity: EntityType, counter: Counter },

    /// A create or update would break a record invariant.
    #[error("Invalid {entity} {id}: {reason}")]
    InvalidRecord {
        entity: EntityType,
        id: String,
        reason: String,
    },

    /// A fixture document could not be read or failed integrity checks.
    #[error("Fixture '{source_name}': {reason}")]
    Fixture { source_name: String, reason: String },

    /// The sort spec string is not recognized.
    #[error("Unknown sort spec '{0}'")]
    SortSpec(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Whether this error means the record simply does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
