use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ForumCategory;

/// A community forum question or discussion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: String,
    /// State of the author's farm at posting time, if known.
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub replies_count: u64,
    #[serde(default)]
    pub is_solved: bool,
}

/// An answer to a forum post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForumReply {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes_count: u64,
}
