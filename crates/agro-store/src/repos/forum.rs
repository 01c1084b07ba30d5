//! Forum posts and replies.

use agro_core::entities::{ForumPost, ForumReply};
use agro_core::enums::{Counter, EntityType, ForumCategory};
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::record::{Record, ensure_not_lowered};
use crate::sort::SortOrder;
use crate::store::AgroStore;
use crate::updates::forum::{ForumPostUpdate, ForumReplyUpdate};

#[derive(Debug, Clone)]
pub struct NewForumPost {
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub tags: Vec<String>,
    pub author_id: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewForumReply {
    pub post_id: String,
    pub content: String,
    pub author_id: String,
}

// ---------------------------------------------------------------------------
// ForumPost
// ---------------------------------------------------------------------------

impl Record for ForumPost {
    const ENTITY: EntityType = EntityType::ForumPost;
    type Draft = NewForumPost;
    type Update = ForumPostUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewForumPost) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            author_id: draft.author_id,
            state: draft.state,
            created_at: now,
            likes_count: 0,
            replies_count: 0,
            is_solved: false,
        }
    }

    fn apply_update(&mut self, update: ForumPostUpdate, _now: DateTime<Utc>) -> Result<(), String> {
        if let Some(v) = update.likes_count {
            ensure_not_lowered(Counter::LikesCount, self.likes_count, v)?;
            self.likes_count = v;
        }
        if let Some(v) = update.replies_count {
            ensure_not_lowered(Counter::RepliesCount, self.replies_count, v)?;
            self.replies_count = v;
        }
        if let Some(v) = update.title {
            self.title = v;
        }
        if let Some(v) = update.content {
            self.content = v;
        }
        if let Some(v) = update.category {
            self.category = v;
        }
        if let Some(v) = update.tags {
            self.tags = v;
        }
        if let Some(v) = update.is_solved {
            self.is_solved = v;
        }
        Ok(())
    }

    fn counter_mut(&mut self, counter: Counter) -> Option<&mut u64> {
        match counter {
            Counter::LikesCount => Some(&mut self.likes_count),
            Counter::RepliesCount => Some(&mut self.replies_count),
            Counter::ViewsCount => None,
        }
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.forum_posts()
    }
}

// ---------------------------------------------------------------------------
// ForumReply
// ---------------------------------------------------------------------------

impl Record for ForumReply {
    const ENTITY: EntityType = EntityType::ForumReply;
    type Draft = NewForumReply;
    type Update = ForumReplyUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewForumReply) -> Self {
        Self {
            id,
            post_id: draft.post_id,
            content: draft.content,
            author_id: draft.author_id,
            created_at: now,
            likes_count: 0,
        }
    }

    fn apply_update(&mut self, update: ForumReplyUpdate, _now: DateTime<Utc>) -> Result<(), String> {
        if let Some(v) = update.likes_count {
            ensure_not_lowered(Counter::LikesCount, self.likes_count, v)?;
            self.likes_count = v;
        }
        if let Some(v) = update.content {
            self.content = v;
        }
        Ok(())
    }

    fn counter_mut(&mut self, counter: Counter) -> Option<&mut u64> {
        match counter {
            Counter::LikesCount => Some(&mut self.likes_count),
            Counter::ViewsCount | Counter::RepliesCount => None,
        }
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.forum_replies()
    }
}

impl AgroStore {
    /// Replies whose `post_id` is `post_id`, in `order`.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store.
    pub async fn replies_for_post(
        &self,
        post_id: &str,
        order: SortOrder,
    ) -> Result<Vec<ForumReply>, StoreError> {
        Ok(self
            .forum_replies()
            .filter(|r| r.post_id == post_id, order)
            .await)
    }

    /// Create a reply after checking that its parent post exists.
    ///
    /// Does not touch the parent's `replies_count`; callers bump it with
    /// [`AgroStore::increment`] once the reply is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the parent post is absent.
    pub async fn reply_to_post(&self, draft: NewForumReply) -> Result<ForumReply, StoreError> {
        self.forum_posts().get(&draft.post_id).await?;
        self.create(draft).await
    }
}
