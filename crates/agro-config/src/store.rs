//! Fixture source configuration for the in-memory store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding `<collection>.json` fixture files. When unset the
    /// fixtures bundled into the binary are used.
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Whether fixtures come from disk rather than the bundled set.
    #[must_use]
    pub const fn uses_external_fixtures(&self) -> bool {
        self.fixtures_dir.is_some()
    }
}
