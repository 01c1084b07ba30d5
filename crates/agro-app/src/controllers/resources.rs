//! Learning resources: search, filters, featured strip, and engagement.

use agro_core::entities::Resource;
use agro_core::enums::Counter;
use agro_core::responses::ResourcesView;
use agro_store::SortOrder;

use super::{Loader, PageController, StoreHandle};
use crate::error::AppError;
use crate::pipelines::resources::{ResourceCriteria, apply, category_stats, featured};

pub struct ResourcesController {
    store: StoreHandle,
    loader: Loader<Vec<Resource>>,
    criteria: ResourceCriteria,
}

impl ResourcesController {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            loader: Loader::default(),
            criteria: ResourceCriteria::default(),
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &ResourceCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: ResourceCriteria) {
        self.criteria = criteria;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    /// Record a view of the resource, then reload.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the resource is gone.
    pub async fn open(&mut self, id: &str) -> Result<Resource, AppError> {
        self.bump(id, Counter::ViewsCount).await
    }

    /// Add one like to the resource, then reload.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the resource is gone.
    pub async fn like(&mut self, id: &str) -> Result<Resource, AppError> {
        self.bump(id, Counter::LikesCount).await
    }

    async fn bump(&mut self, id: &str, counter: Counter) -> Result<Resource, AppError> {
        let resource = self.store.increment::<Resource>(id, counter, 1).await?;
        self.load().await;
        Ok(resource)
    }

    #[must_use]
    pub fn view(&self) -> Option<ResourcesView> {
        let resources = self.loader.data()?;
        Some(ResourcesView {
            total: resources.len(),
            resources: apply(resources, &self.criteria),
            featured: featured(resources),
            category_stats: category_stats(resources),
        })
    }
}

impl PageController for ResourcesController {
    type Data = Vec<Resource>;
    const PAGE: &'static str = "resources";

    fn loader(&self) -> &Loader<Vec<Resource>> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<Vec<Resource>> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<Vec<Resource>, AppError> {
        Ok(self.store.list(SortOrder::NewestFirst, None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bundled_store;

    const RESOURCE: &str = "res-e5000001";

    fn held(controller: &ResourcesController, id: &str) -> Resource {
        controller
            .view()
            .unwrap()
            .resources
            .into_iter()
            .find(|r| r.id == id)
            .unwrap()
    }

    #[tokio::test]
    async fn open_bumps_views_and_reloads() {
        let mut resources = ResourcesController::new(bundled_store());
        resources.load().await;
        let before = held(&resources, RESOURCE);
        resources.open(RESOURCE).await.unwrap();
        let after = held(&resources, RESOURCE);
        assert_eq!(after.views_count, before.views_count + 1);
        assert_eq!(after.likes_count, before.likes_count);
    }

    #[tokio::test]
    async fn like_bumps_likes() {
        let mut resources = ResourcesController::new(bundled_store());
        resources.load().await;
        let before = held(&resources, RESOURCE);
        let liked = resources.like(RESOURCE).await.unwrap();
        assert_eq!(liked.likes_count, before.likes_count + 1);
        assert_eq!(held(&resources, RESOURCE).likes_count, liked.likes_count);
    }

    #[tokio::test]
    async fn featured_and_stats_ignore_filters() {
        let mut resources = ResourcesController::new(bundled_store());
        resources.load().await;
        resources.set_search("no such phrase anywhere");
        let view = resources.view().unwrap();
        assert!(view.resources.is_empty());
        assert!(!view.featured.is_empty());
        assert!(view.featured.len() <= 3);
        assert_eq!(
            view.category_stats.iter().map(|c| c.count).sum::<usize>(),
            view.total
        );
    }

    #[tokio::test]
    async fn water_search_skips_category_label() {
        let mut resources = ResourcesController::new(bundled_store());
        resources.load().await;
        resources.set_search("water");
        let view = resources.view().unwrap();
        for r in &view.resources {
            let text = format!("{} {} {}", r.title, r.description, r.tags.join(" ")).to_lowercase();
            assert!(text.contains("water"), "{} matched without literal text", r.id);
        }
    }

    #[tokio::test]
    async fn opening_missing_resource_fails() {
        let mut resources = ResourcesController::new(bundled_store());
        let err = resources.open("res-missing").await.unwrap_err();
        assert!(matches!(err, AppError::Store(ref e) if e.is_not_found()));
    }
}
