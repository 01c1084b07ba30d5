//! # agro-config
//!
//! Layered configuration loading for agrodash using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGRO_*` prefix, `__` as separator)
//! 2. Project-level `.agro/config.toml`
//! 3. User-level `~/.config/agro/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGRO_WEATHER__CURRENT_DELAY_MS` -> `weather.current_delay_ms`,
//! `AGRO_STORE__FIXTURES_DIR` -> `store.fixtures_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use agro_config::AgroConfig;
//!
//! let config = AgroConfig::load_with_dotenv().expect("config");
//! println!("default state: {}", config.general.default_state);
//! ```

mod error;
mod general;
mod store;
mod weather;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;
pub use weather::WeatherConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgroConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AgroConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".agro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("AGRO_").split("__"))
    }

    /// Reject values that would make the dashboard misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.forecast_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "weather.forecast_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.default_state.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_state".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agro").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AgroConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.store.uses_external_fixtures());
    }

    #[test]
    fn zero_forecast_days_rejected() {
        let mut config = AgroConfig::default();
        config.weather.forecast_days = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "weather.forecast_days"));
    }

    #[test]
    fn figment_builds_without_files() {
        let config: AgroConfig = AgroConfig::figment().extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.weather.forecast_days, 7);
    }
}
