//! Learning resource records.

use agro_core::entities::Resource;
use agro_core::enums::{Counter, DifficultyLevel, EntityType, ResourceCategory, ResourceType};
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::record::{Record, ensure_not_lowered};
use crate::sort::SortOrder;
use crate::store::AgroStore;
use crate::updates::resource::ResourceUpdate;

#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: ResourceCategory,
    pub resource_type: ResourceType,
    pub difficulty_level: DifficultyLevel,
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub external_url: Option<String>,
    pub read_time_minutes: u32,
    pub is_featured: bool,
}

impl Record for Resource {
    const ENTITY: EntityType = EntityType::Resource;
    type Draft = NewResource;
    type Update = ResourceUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewResource) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            category: draft.category,
            resource_type: draft.resource_type,
            difficulty_level: draft.difficulty_level,
            tags: draft.tags,
            author: draft.author,
            image_url: draft.image_url,
            external_url: draft.external_url,
            read_time_minutes: draft.read_time_minutes,
            views_count: 0,
            likes_count: 0,
            is_featured: draft.is_featured,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: ResourceUpdate, now: DateTime<Utc>) -> Result<(), String> {
        if let Some(v) = update.views_count {
            ensure_not_lowered(Counter::ViewsCount, self.views_count, v)?;
            self.views_count = v;
        }
        if let Some(v) = update.likes_count {
            ensure_not_lowered(Counter::LikesCount, self.likes_count, v)?;
            self.likes_count = v;
        }
        if let Some(v) = update.title {
            self.title = v;
        }
        if let Some(v) = update.description {
            self.description = v;
        }
        if let Some(v) = update.content {
            self.content = v;
        }
        if let Some(v) = update.category {
            self.category = v;
        }
        if let Some(v) = update.resource_type {
            self.resource_type = v;
        }
        if let Some(v) = update.difficulty_level {
            self.difficulty_level = v;
        }
        if let Some(v) = update.tags {
            self.tags = v;
        }
        if let Some(v) = update.author {
            self.author = v;
        }
        if let Some(v) = update.read_time_minutes {
            self.read_time_minutes = v;
        }
        if let Some(v) = update.is_featured {
            self.is_featured = v;
        }
        self.updated_at = now;
        Ok(())
    }

    fn counter_mut(&mut self, counter: Counter) -> Option<&mut u64> {
        match counter {
            Counter::ViewsCount => Some(&mut self.views_count),
            Counter::LikesCount => Some(&mut self.likes_count),
            Counter::RepliesCount => None,
        }
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.resources()
    }
}

impl AgroStore {
    /// Resources flagged as featured, in `order`.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store.
    pub async fn featured_resources(&self, order: SortOrder) -> Result<Vec<Resource>, StoreError> {
        Ok(self.resources().filter(|r| r.is_featured, order).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_store;
    use crate::updates::resource::ResourceUpdateBuilder;

    #[tokio::test]
    async fn open_increments_views_only() {
        let store = test_store();
        let before: Resource = store.get("res-e5000001").await.unwrap();
        let after: Resource = store
            .increment("res-e5000001", Counter::ViewsCount, 1)
            .await
            .unwrap();
        assert_eq!(after.views_count, before.views_count + 1);
        assert_eq!(after.likes_count, before.likes_count);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at() {
        let store = test_store();
        let before: Resource = store.get("res-e5000002").await.unwrap();
        let update = ResourceUpdateBuilder::new().is_featured(false).build();
        let after: Resource = store.update("res-e5000002", update).await.unwrap();
        assert!(!after.is_featured);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn featured_resources_keep_storage_order() {
        let store = test_store();
        let featured = store.featured_resources(SortOrder::Insertion).await.unwrap();
        let ids: Vec<&str> = featured.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["res-e5000001", "res-e5000002", "res-e5000004", "res-e5000005"]
        );
    }

    #[tokio::test]
    async fn lowering_views_is_rejected() {
        let store = test_store();
        let update = ResourceUpdateBuilder::new().views_count(0).build();
        let before: Resource = store.get("res-e5000001").await.unwrap();
        assert!(before.views_count > 0);
        assert!(store.update::<Resource>("res-e5000001", update).await.is_err());
    }
}
