//! Simulated weather feed configuration.
//!
//! There is no live weather provider; current conditions and the forecast
//! are synthesized after a fixed delay so the page exercises its loading
//! state the same way a network call would.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_current_delay_ms() -> u64 {
    1000
}

const fn default_forecast_delay_ms() -> u64 {
    800
}

const fn default_forecast_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_current_delay_ms")]
    pub current_delay_ms: u64,

    #[serde(default = "default_forecast_delay_ms")]
    pub forecast_delay_ms: u64,

    /// Number of forecast days, starting today.
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

impl WeatherConfig {
    #[must_use]
    pub const fn current_delay(&self) -> Duration {
        Duration::from_millis(self.current_delay_ms)
    }

    #[must_use]
    pub const fn forecast_delay(&self) -> Duration {
        Duration::from_millis(self.forecast_delay_ms)
    }

    /// Zero-delay settings for tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            current_delay_ms: 0,
            forecast_delay_ms: 0,
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            current_delay_ms: default_current_delay_ms(),
            forecast_delay_ms: default_forecast_delay_ms(),
            forecast_days: default_forecast_days(),
        }
    }
}
