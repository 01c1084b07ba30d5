use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DifficultyLevel, ResourceCategory, ResourceType};

/// A learning resource in the knowledge library.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: ResourceCategory,
    pub resource_type: ResourceType,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub external_url: Option<String>,
    #[serde(default)]
    pub read_time_minutes: u32,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
