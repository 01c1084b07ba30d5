//! Forum post and reply update builders.

use agro_core::enums::ForumCategory;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ForumPostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ForumCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_solved: Option<bool>,
}

pub struct ForumPostUpdateBuilder(ForumPostUpdate);

impl ForumPostUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ForumPostUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.0.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: ForumCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub const fn likes_count(mut self, count: u64) -> Self {
        self.0.likes_count = Some(count);
        self
    }

    #[must_use]
    pub const fn replies_count(mut self, count: u64) -> Self {
        self.0.replies_count = Some(count);
        self
    }

    #[must_use]
    pub const fn is_solved(mut self, solved: bool) -> Self {
        self.0.is_solved = Some(solved);
        self
    }

    #[must_use]
    pub fn build(self) -> ForumPostUpdate {
        self.0
    }
}

impl Default for ForumPostUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ForumReplyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
}
