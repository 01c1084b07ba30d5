//! The store: sole owner of every canonical collection.
//!
//! `AgroStore` is constructed once from a [`Seed`] and handed to controllers
//! by reference. Nothing is persisted; dropping the store discards all
//! mutations. Each test builds its own store, so tests never share state.
//!
//! Every operation is `async` even though it completes without suspending
//! on I/O, so a networked backend can replace this one without changing
//! callers.

use agro_config::StoreConfig;
use agro_core::entities::{
    CropRecommendation, Farm, ForumPost, ForumReply, Resource, User, WeatherInsight,
};
use agro_core::enums::Counter;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::fixtures::Seed;
use crate::record::Record;
use crate::sort::SortOrder;

pub struct AgroStore {
    farms: Collection<Farm>,
    weather_insights: Collection<WeatherInsight>,
    crop_recommendations: Collection<CropRecommendation>,
    resources: Collection<Resource>,
    forum_posts: Collection<ForumPost>,
    forum_replies: Collection<ForumReply>,
    users: Collection<User>,
}

impl AgroStore {
    /// Build a store that owns the records of `seed`.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        tracing::debug!(
            farms = seed.farms.len(),
            weather_insights = seed.weather_insights.len(),
            crop_recommendations = seed.crop_recommendations.len(),
            resources = seed.resources.len(),
            forum_posts = seed.forum_posts.len(),
            forum_replies = seed.forum_replies.len(),
            users = seed.users.len(),
            "store seeded"
        );
        Self {
            farms: Collection::new(seed.farms),
            weather_insights: Collection::new(seed.weather_insights),
            crop_recommendations: Collection::new(seed.crop_recommendations),
            resources: Collection::new(seed.resources),
            forum_posts: Collection::new(seed.forum_posts),
            forum_replies: Collection::new(seed.forum_replies),
            users: Collection::new(seed.users),
        }
    }

    /// A store with every collection empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_seed(Seed::default())
    }

    /// A store seeded from the fixtures compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if a bundled document is malformed.
    pub fn bundled() -> Result<Self, StoreError> {
        Ok(Self::from_seed(Seed::bundled()?))
    }

    /// A store seeded per configuration: the configured fixture directory if
    /// set, the bundled fixtures otherwise.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if a fixture cannot be read or parsed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let seed = match &config.fixtures_dir {
            Some(dir) => Seed::from_dir(dir)?,
            None => Seed::bundled()?,
        };
        Ok(Self::from_seed(seed))
    }

    pub const fn farms(&self) -> &Collection<Farm> {
        &self.farms
    }

    pub const fn weather_insights(&self) -> &Collection<WeatherInsight> {
        &self.weather_insights
    }

    pub const fn crop_recommendations(&self) -> &Collection<CropRecommendation> {
        &self.crop_recommendations
    }

    pub const fn resources(&self) -> &Collection<Resource> {
        &self.resources
    }

    pub const fn forum_posts(&self) -> &Collection<ForumPost> {
        &self.forum_posts
    }

    pub const fn forum_replies(&self) -> &Collection<ForumReply> {
        &self.forum_replies
    }

    pub const fn users(&self) -> &Collection<User> {
        &self.users
    }

    /// Copy of a collection, ordered by `order` and truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store; the signature leaves room for a
    /// backend that can fail.
    pub async fn list<T: Record>(
        &self,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<T>, StoreError> {
        Ok(T::collection(self).list(order, limit).await)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    pub async fn get<T: Record>(&self, id: &str) -> Result<T, StoreError> {
        T::collection(self).get(id).await
    }

    /// Assign an ID and creation timestamp, merge `draft` over the entity's
    /// defaults, append, and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecord` if the record breaks an invariant.
    pub async fn create<T: Record>(&self, draft: T::Draft) -> Result<T, StoreError> {
        T::collection(self).insert(draft).await
    }

    /// Shallow-merge `update` into the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `id` is absent, or
    /// `StoreError::InvalidRecord` if the merge breaks an invariant.
    pub async fn update<T: Record>(&self, id: &str, update: T::Update) -> Result<T, StoreError> {
        T::collection(self).update(id, update).await
    }

    /// Atomically add `delta` to `counter` on the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::UnknownCounter`.
    pub async fn increment<T: Record>(
        &self,
        id: &str,
        counter: Counter,
        delta: u64,
    ) -> Result<T, StoreError> {
        T::collection(self).increment(id, counter, delta).await
    }
}
