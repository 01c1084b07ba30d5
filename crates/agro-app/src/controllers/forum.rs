//! Community forum: post list, filters, and new posts.

use agro_core::entities::{Farm, ForumPost, User};
use agro_core::enums::ForumCategory;
use agro_core::responses::ForumView;
use agro_store::SortOrder;
use agro_store::repos::NewForumPost;

use super::{Loader, PageController, StoreHandle};
use crate::error::AppError;
use crate::pipelines::forum::{ForumCriteria, apply};

#[derive(Debug, Clone)]
pub struct ForumData {
    pub posts: Vec<ForumPost>,
    pub farm: Option<Farm>,
    pub user: Option<User>,
}

/// Fields of the "new post" form.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: Option<ForumCategory>,
    pub tags: Vec<String>,
}

impl PostForm {
    /// Title, content, and category are required.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first missing field.
    pub fn validate(&self) -> Result<ForumCategory, AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Post title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::validation("Post content is required"));
        }
        self.category
            .ok_or_else(|| AppError::validation("Post category is required"))
    }
}

pub struct ForumController {
    store: StoreHandle,
    loader: Loader<ForumData>,
    criteria: ForumCriteria,
}

impl ForumController {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            loader: Loader::default(),
            criteria: ForumCriteria::default(),
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &ForumCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: ForumCriteria) {
        self.criteria = criteria;
    }

    /// Validate and store a new post, then reload the page.
    ///
    /// The post is stamped with the current user as author and the active
    /// farm's state, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` before touching the store if a required
    /// field is blank, or a store error if no current user exists.
    pub async fn create_post(&mut self, form: PostForm) -> Result<ForumPost, AppError> {
        let category = form.validate()?;
        let (user, farm) = tokio::try_join!(self.store.current_user(), self.store.active_farm())?;
        let post: ForumPost = self
            .store
            .create(NewForumPost {
                title: form.title.trim().to_string(),
                content: form.content.trim().to_string(),
                category,
                tags: form.tags,
                author_id: user.id,
                state: farm.map(|f| f.state),
            })
            .await?;
        tracing::debug!(id = %post.id, "forum post created");
        self.load().await;
        Ok(post)
    }

    #[must_use]
    pub fn view(&self) -> Option<ForumView> {
        let data = self.loader.data()?;
        let posts = apply(&data.posts, &self.criteria);
        Some(ForumView {
            user: data.user.clone(),
            farm_state: data.farm.as_ref().map(|f| f.state.clone()),
            total: posts.len(),
            posts,
        })
    }
}

impl PageController for ForumController {
    type Data = ForumData;
    const PAGE: &'static str = "community";

    fn loader(&self) -> &Loader<ForumData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<ForumData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<ForumData, AppError> {
        let (posts, farm, user) = tokio::try_join!(
            self.store.list::<ForumPost>(SortOrder::NewestFirst, None),
            self.store.active_farm(),
            self.store.current_user(),
        )?;
        Ok(ForumData {
            posts,
            farm,
            user: Some(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::LoadState;
    use crate::criteria::Choice;
    use crate::test_support::{bundled_store, empty_store};
    use pretty_assertions::assert_eq;

    fn form() -> PostForm {
        PostForm {
            title: "  Cassava mosaic in Ogun  ".into(),
            content: "Anyone seen this spreading?".into(),
            category: Some(ForumCategory::PestControl),
            tags: vec!["cassava".into()],
        }
    }

    #[tokio::test]
    async fn create_post_stamps_author_and_state_then_reloads() {
        let mut forum = ForumController::new(bundled_store());
        forum.load().await;
        let before = forum.view().unwrap().total;

        let post = forum.create_post(form()).await.unwrap();
        assert_eq!(post.title, "Cassava mosaic in Ogun");
        assert_eq!(post.author_id, "usr-1f2e3d4c");
        assert_eq!(post.state.as_deref(), Some("Lagos"));

        let view = forum.view().unwrap();
        assert_eq!(view.total, before + 1);
        assert_eq!(view.posts[0].id, post.id);
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_store() {
        let store = bundled_store();
        let mut forum = ForumController::new(store.clone());
        let count = store.forum_posts().len().await;

        for broken in [
            PostForm {
                title: "   ".into(),
                ..form()
            },
            PostForm {
                content: String::new(),
                ..form()
            },
            PostForm {
                category: None,
                ..form()
            },
        ] {
            let err = forum.create_post(broken).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(store.forum_posts().len().await, count);
    }

    #[tokio::test]
    async fn missing_user_fails_the_load() {
        let mut forum = ForumController::new(empty_store());
        assert!(forum.load().await);
        assert!(matches!(forum.state(), LoadState::Failed { .. }));
        assert!(forum.view().is_none());
    }

    #[tokio::test]
    async fn filters_apply_to_held_posts() {
        let mut forum = ForumController::new(bundled_store());
        forum.load().await;
        forum.set_criteria(ForumCriteria {
            category: Choice::Only(ForumCategory::MarketPrices),
            search: String::new(),
        });
        let view = forum.view().unwrap();
        assert!(
            view.posts
                .iter()
                .all(|p| p.category == ForumCategory::MarketPrices)
        );
        assert_eq!(view.total, view.posts.len());
    }

    #[tokio::test]
    async fn stale_load_is_discarded() {
        let mut forum = ForumController::new(bundled_store());
        let first = forum.begin_load();
        let second = forum.begin_load();
        let fresh = forum.fetch().await;
        assert!(forum.finish_load(second, fresh));
        let late = forum.fetch().await;
        assert!(!forum.finish_load(first, late));
    }

    #[tokio::test]
    async fn result_after_unmount_is_ignored() {
        let mut forum = ForumController::new(bundled_store());
        let ticket = forum.begin_load();
        let result = forum.fetch().await;
        forum.unmount();
        assert!(!forum.finish_load(ticket, result));
        assert!(forum.view().is_none());
    }
}
