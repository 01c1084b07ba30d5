//! The `Record` trait ties an entity to its collection, its create draft,
//! and its partial update.

use agro_core::enums::{Counter, EntityType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::collection::Collection;
use crate::store::AgroStore;

/// An entity stored in one of the store's collections.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection this record lives in; also selects the ID prefix.
    const ENTITY: EntityType;

    /// Caller-supplied fields for `create`. Everything else is defaulted.
    type Draft: Send;

    /// Partial fields for `update`. `None` leaves a field untouched; lists
    /// replace rather than append.
    type Update: Serialize + Send;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Build a stored record from a draft, stamping `id` and `now`.
    fn from_draft(id: String, now: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merge `update` into `self`.
    ///
    /// # Errors
    ///
    /// Returns the reason when the merge would break an invariant (for
    /// example lowering an engagement counter).
    fn apply_update(&mut self, update: Self::Update, now: DateTime<Utc>) -> Result<(), String>;

    /// Mutable access to an engagement counter, if this entity has it.
    fn counter_mut(&mut self, _counter: Counter) -> Option<&mut u64> {
        None
    }

    /// Integrity check run on fixtures and on every created/updated record.
    ///
    /// # Errors
    ///
    /// Returns the reason the record is malformed.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }

    /// Select this entity's collection from the store.
    fn collection(store: &AgroStore) -> &Collection<Self>;
}

/// Reject an update that would lower a counter.
///
/// # Errors
///
/// Returns the reason string when `new < current`.
pub fn ensure_not_lowered(counter: Counter, current: u64, new: u64) -> Result<(), String> {
    if new < current {
        return Err(format!("{counter} cannot decrease ({current} -> {new})"));
    }
    Ok(())
}
