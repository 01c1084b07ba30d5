//! # agro-app
//!
//! Navigation, filtering, and page orchestration for agrodash.
//!
//! - [`routes`] maps page names to paths and paths back to screens
//! - [`pipelines`] holds the pure filter/sort/rank functions each page uses
//! - [`controllers`] load a page's data from the store, guard against stale
//!   results, and run the page's mutations
//! - [`shell`] mounts and loads the screen for a path
//! - [`weather`] is the simulated current-conditions and forecast feed

pub mod catalog;
pub mod controllers;
pub mod criteria;
pub mod error;
pub mod pipelines;
pub mod routes;
pub mod shell;
pub mod weather;

pub use controllers::{LoadState, PageController, StoreHandle};
pub use error::AppError;
pub use routes::{Page, Route, resolve};
pub use shell::{Screen, Shell, render_controller};

#[cfg(test)]
mod test_support {
    use std::sync::Arc;

    use agro_store::{AgroStore, Seed};

    pub fn bundled_store() -> Arc<AgroStore> {
        Arc::new(AgroStore::bundled().unwrap())
    }

    pub fn empty_store() -> Arc<AgroStore> {
        Arc::new(AgroStore::empty())
    }

    /// Bundled users, nothing else.
    pub fn store_with_users_only() -> Arc<AgroStore> {
        let users = Seed::bundled().unwrap().users;
        Arc::new(AgroStore::from_seed(Seed {
            users,
            ..Seed::default()
        }))
    }
}
