//! Resource update builder.

use agro_core::enums::{DifficultyLevel, ResourceCategory, ResourceType};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

pub struct ResourceUpdateBuilder(ResourceUpdate);

impl ResourceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ResourceUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: ResourceCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn author(mut self, author: Option<String>) -> Self {
        self.0.author = Some(author);
        self
    }

    #[must_use]
    pub const fn views_count(mut self, count: u64) -> Self {
        self.0.views_count = Some(count);
        self
    }

    #[must_use]
    pub const fn likes_count(mut self, count: u64) -> Self {
        self.0.likes_count = Some(count);
        self
    }

    #[must_use]
    pub const fn is_featured(mut self, featured: bool) -> Self {
        self.0.is_featured = Some(featured);
        self
    }

    #[must_use]
    pub fn build(self) -> ResourceUpdate {
        self.0
    }
}

impl Default for ResourceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
