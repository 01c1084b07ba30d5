//! Page controllers.
//!
//! Each controller owns a [`Loader`] for the data its page fetches, the
//! filter criteria the user has picked, and a handle to the shared store.
//! Loads are split into `begin_load` / `fetch` / `finish_load` so a result
//! that arrives after a newer load started, or after the page unmounted, is
//! dropped instead of overwriting fresher state.

use std::future::Future;
use std::sync::Arc;

use agro_store::AgroStore;

use crate::error::AppError;

pub mod dashboard;
pub mod forum;
pub mod post_details;
pub mod profile;
pub mod recommendations;
pub mod resources;
pub mod weather;

pub use dashboard::DashboardController;
pub use forum::ForumController;
pub use post_details::PostDetailsController;
pub use profile::ProfileController;
pub use recommendations::RecommendationsController;
pub use resources::ResourcesController;
pub use weather::WeatherController;

/// Lifecycle of a page's data.
///
/// `Failed` is distinct from a `Ready` page whose collections are empty.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed { message: String },
}

impl<T> LoadState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Generation stamp handed out when a load starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load result can only be applied with the ticket that started it"]
pub struct Ticket(u64);

/// Load state plus the generation counter guarding it.
#[derive(Debug)]
pub struct Loader<T> {
    state: LoadState<T>,
    generation: u64,
    mounted: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
            mounted: true,
        }
    }
}

impl<T> Loader<T> {
    /// Enter `Loading` and stamp a new generation.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Apply a fetch result if `ticket` is still current.
    ///
    /// Returns whether the result was applied.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, AppError>, page: &str) -> bool {
        if !self.mounted || ticket.0 != self.generation {
            tracing::warn!(
                page,
                ticket = ticket.0,
                current = self.generation,
                mounted = self.mounted,
                "discarding stale load result"
            );
            return false;
        }
        self.state = match result {
            Ok(data) => {
                tracing::debug!(page, generation = ticket.0, "load complete");
                LoadState::Ready(data)
            }
            Err(e) => {
                tracing::error!(page, error = %e, "load failed");
                LoadState::Failed {
                    message: e.public_message().to_string(),
                }
            }
        };
        true
    }

    /// Stop accepting results; anything still in flight is dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.state = LoadState::Idle;
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Shared contract of every page controller.
pub trait PageController: Send + Sync {
    /// Collections the page holds once loaded.
    type Data: Send + Sync;

    /// Name used in logs.
    const PAGE: &'static str;

    fn loader(&self) -> &Loader<Self::Data>;

    fn loader_mut(&mut self) -> &mut Loader<Self::Data>;

    /// Issue the store calls for this page. Borrows the controller only
    /// immutably so a load can be in flight while another one starts.
    fn fetch(&self) -> impl Future<Output = Result<Self::Data, AppError>> + Send;

    /// Hook run after fresh data is applied (e.g. to seed form state).
    fn on_ready(&mut self) {}

    fn begin_load(&mut self) -> Ticket {
        tracing::debug!(page = Self::PAGE, "load dispatched");
        self.loader_mut().begin()
    }

    fn finish_load(&mut self, ticket: Ticket, result: Result<Self::Data, AppError>) -> bool {
        let applied = self.loader_mut().finish(ticket, result, Self::PAGE);
        if applied && self.loader().data().is_some() {
            self.on_ready();
        }
        applied
    }

    /// Full load: begin, fetch, and apply. Used on mount, on refresh, and
    /// after every mutation.
    fn load(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            let ticket = self.begin_load();
            let result = self.fetch().await;
            self.finish_load(ticket, result)
        }
    }

    fn unmount(&mut self) {
        tracing::debug!(page = Self::PAGE, "unmounted");
        self.loader_mut().unmount();
    }

    fn state(&self) -> &LoadState<Self::Data> {
        self.loader().state()
    }
}

/// Shared store handle every controller is built with.
pub type StoreHandle = Arc<AgroStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use agro_store::StoreError;

    #[test]
    fn newer_ticket_wins() {
        let mut loader: Loader<u32> = Loader::default();
        let first = loader.begin();
        let second = loader.begin();
        assert!(loader.finish(second, Ok(2), "test"));
        assert!(!loader.finish(first, Ok(1), "test"));
        assert_eq!(loader.data(), Some(&2));
    }

    #[test]
    fn result_after_unmount_is_dropped() {
        let mut loader: Loader<u32> = Loader::default();
        let ticket = loader.begin();
        loader.unmount();
        assert!(!loader.finish(ticket, Ok(7), "test"));
        assert_eq!(loader.state(), &LoadState::Idle);
        assert!(!loader.is_mounted());
    }

    #[test]
    fn failure_is_not_an_empty_dataset() {
        let mut loader: Loader<Vec<u32>> = Loader::default();
        let ticket = loader.begin();
        let err = AppError::Store(StoreError::SortSpec("bogus".into()));
        assert!(loader.finish(ticket, Err(err), "test"));
        assert!(matches!(loader.state(), LoadState::Failed { .. }));
        assert!(loader.data().is_none());
        assert_eq!(loader.state().name(), "failed");
    }

    #[test]
    fn begin_enters_loading() {
        let mut loader: Loader<u32> = Loader::default();
        assert_eq!(loader.state().name(), "idle");
        let _ticket = loader.begin();
        assert!(loader.state().is_loading());
    }
}
