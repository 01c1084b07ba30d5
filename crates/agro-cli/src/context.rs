use std::sync::Arc;

use agro_app::{Shell, StoreHandle};
use agro_config::AgroConfig;
use agro_store::AgroStore;

/// Resources shared by every command, built once per invocation.
pub struct AppContext {
    pub shell: Shell,
}

impl AppContext {
    /// Seed the store from the configured fixtures (or the bundled ones).
    pub fn init(config: AgroConfig) -> anyhow::Result<Self> {
        let store = AgroStore::from_config(&config.store)?;
        tracing::debug!(
            fixtures = ?config.store.fixtures_dir,
            "store seeded"
        );
        Ok(Self {
            shell: Shell::new(Arc::new(store), config),
        })
    }

    pub fn store(&self) -> StoreHandle {
        self.shell.store().clone()
    }

    pub const fn config(&self) -> &AgroConfig {
        self.shell.config()
    }
}
