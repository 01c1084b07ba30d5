//! Generic in-memory collection backing every entity type.
//!
//! The collection owns its records exclusively. Reads hand out clones, so
//! callers can never mutate canonical state except through `insert`,
//! `update`, and `increment`.

use agro_core::enums::Counter;
use agro_core::ids::{format_id, prefix_for};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::record::Record;
use crate::sort::SortOrder;

pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Snapshot of the collection, ordered and truncated.
    pub async fn list(&self, order: SortOrder, limit: Option<usize>) -> Vec<T> {
        let mut records = self.records.read().await.clone();
        order.apply(&mut records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        records
    }

    /// Snapshot of the records matching `predicate`, ordered.
    pub async fn filter<F>(&self, predicate: F, order: SortOrder) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        let mut records: Vec<T> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        order.apply(&mut records);
        records
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Append a new record built from `draft` and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecord` if the built record fails its
    /// integrity check, or `StoreError::Other` if no random ID is available.
    pub async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let id = loop {
            let candidate = generate_id(prefix_for(T::ENTITY))?;
            if !records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
        };

        let record = T::from_draft(id, Utc::now(), draft);
        record.check().map_err(|reason| invalid::<T>(record.id(), reason))?;
        records.push(record.clone());
        tracing::debug!(entity = %T::ENTITY, id = record.id(), "record created");
        Ok(record)
    }

    /// Shallow-merge `update` into the record with `id`.
    ///
    /// The merge is applied to a copy and committed only if it succeeds, so
    /// a rejected update leaves the stored record untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `id` is absent, or
    /// `StoreError::InvalidRecord` if the merged record breaks an invariant.
    pub async fn update(&self, id: &str, update: T::Update) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;

        let mut merged = slot.clone();
        merged
            .apply_update(update, Utc::now())
            .and_then(|()| merged.check())
            .map_err(|reason| invalid::<T>(id, reason))?;
        *slot = merged.clone();
        tracing::debug!(entity = %T::ENTITY, id, "record updated");
        Ok(merged)
    }

    /// Atomically add `delta` to a counter and return the updated record.
    ///
    /// The read and the write happen under one write lock, so concurrent
    /// increments never lose an update.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `id` is absent, or
    /// `StoreError::UnknownCounter` if the entity has no such counter.
    pub async fn increment(&self, id: &str, counter: Counter, delta: u64) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        let value = slot.counter_mut(counter).ok_or(StoreError::UnknownCounter {
            entity: T::ENTITY,
            counter,
        })?;
        *value = value.saturating_add(delta);
        tracing::debug!(entity = %T::ENTITY, id, %counter, delta, "counter incremented");
        Ok(slot.clone())
    }
}

fn not_found<T: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity: T::ENTITY,
        id: id.to_string(),
    }
}

fn invalid<T: Record>(id: &str, reason: String) -> StoreError {
    StoreError::InvalidRecord {
        entity: T::ENTITY,
        id: id.to_string(),
        reason,
    }
}

fn generate_id(prefix: &str) -> Result<String, StoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| StoreError::Other(anyhow::anyhow!("random id generation failed: {e}")))?;
    Ok(format_id(prefix, bytes))
}
