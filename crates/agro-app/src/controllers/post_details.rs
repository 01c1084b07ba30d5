//! A single forum post with its replies.

use agro_core::entities::{ForumPost, ForumReply};
use agro_core::enums::Counter;
use agro_core::responses::PostDetailsView;
use agro_store::SortOrder;
use agro_store::repos::NewForumReply;

use super::{Loader, PageController, StoreHandle};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct PostDetailsData {
    pub post: ForumPost,
    pub replies: Vec<ForumReply>,
}

pub struct PostDetailsController {
    store: StoreHandle,
    loader: Loader<PostDetailsData>,
    post_id: String,
}

impl PostDetailsController {
    #[must_use]
    pub fn new(store: StoreHandle, post_id: impl Into<String>) -> Self {
        Self {
            store,
            loader: Loader::default(),
            post_id: post_id.into(),
        }
    }

    #[must_use]
    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// Store a reply from the current user, bump the post's reply count,
    /// then reload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for blank text, or a store error if
    /// the post or current user is missing.
    pub async fn submit_reply(&mut self, content: &str) -> Result<ForumReply, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Reply text is required"));
        }
        let user = self.store.current_user().await?;
        let reply = self
            .store
            .reply_to_post(NewForumReply {
                post_id: self.post_id.clone(),
                content: content.to_string(),
                author_id: user.id,
            })
            .await?;
        self.store
            .increment::<ForumPost>(&self.post_id, Counter::RepliesCount, 1)
            .await?;
        self.load().await;
        Ok(reply)
    }

    /// Add one like to the post, then reload.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the post is gone.
    pub async fn like_post(&mut self) -> Result<ForumPost, AppError> {
        let post = self
            .store
            .increment::<ForumPost>(&self.post_id, Counter::LikesCount, 1)
            .await?;
        self.load().await;
        Ok(post)
    }

    /// Mark a reply helpful (one like), then reload.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the reply is gone.
    pub async fn like_reply(&mut self, reply_id: &str) -> Result<ForumReply, AppError> {
        let reply = self
            .store
            .increment::<ForumReply>(reply_id, Counter::LikesCount, 1)
            .await?;
        self.load().await;
        Ok(reply)
    }

    #[must_use]
    pub fn view(&self) -> Option<PostDetailsView> {
        self.loader.data().map(|data| PostDetailsView {
            post: data.post.clone(),
            replies: data.replies.clone(),
        })
    }
}

impl PageController for PostDetailsController {
    type Data = PostDetailsData;
    const PAGE: &'static str = "post_details";

    fn loader(&self) -> &Loader<PostDetailsData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<PostDetailsData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<PostDetailsData, AppError> {
        let (post, replies) = tokio::try_join!(
            self.store.get::<ForumPost>(&self.post_id),
            self.store
                .replies_for_post(&self.post_id, SortOrder::NewestFirst),
        )?;
        Ok(PostDetailsData { post, replies })
    }
}
