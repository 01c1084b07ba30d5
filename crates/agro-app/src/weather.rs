//! Simulated weather feed and placeholder farming advice.
//!
//! There is no real weather provider. The feed waits the configured delays
//! to mimic network latency and returns fixed current conditions and a
//! forecast that depends only on the day index.

use agro_config::WeatherConfig;
use agro_core::enums::WeatherCondition;
use agro_core::responses::{CurrentWeather, FarmingAdvice, ForecastDay};
use chrono::{Days, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct WeatherFeed {
    config: WeatherConfig,
}

impl WeatherFeed {
    #[must_use]
    pub const fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    /// Current conditions for `location`.
    pub async fn current(&self, location: &str) -> CurrentWeather {
        tokio::time::sleep(self.config.current_delay()).await;
        tracing::debug!(location, "simulated current weather");
        CurrentWeather {
            location: location.to_string(),
            temperature_celsius: 28,
            feels_like_celsius: 32,
            humidity_percent: 75,
            wind_speed_kmh: 12,
            visibility_km: 8,
            uv_index: 6,
            condition: WeatherCondition::PartlyCloudy,
            description: "Partly cloudy with scattered showers".to_string(),
            last_updated: Utc::now(),
        }
    }

    /// A forecast of `forecast_days` days starting at `start`.
    pub async fn forecast(&self, location: &str, start: NaiveDate) -> Vec<ForecastDay> {
        tokio::time::sleep(self.config.forecast_delay()).await;
        tracing::debug!(location, days = self.config.forecast_days, "simulated forecast");
        (0..self.config.forecast_days)
            .map(|i| forecast_day(start, i))
            .collect()
    }
}

/// Deterministic values for day `index`, within the ranges a West African
/// lowland forecast would show.
#[must_use]
pub fn forecast_day(start: NaiveDate, index: u32) -> ForecastDay {
    let i = index;
    let rainfall_mm = if i % 3 == 1 { 2 + (i * 4) % 15 } else { 0 };
    let condition = if rainfall_mm > 0 {
        WeatherCondition::Rainy
    } else {
        WeatherCondition::ALL[(i as usize) % 3]
    };
    ForecastDay {
        date: start
            .checked_add_days(Days::new(u64::from(i)))
            .unwrap_or(start),
        high_celsius: 28 + i32::try_from((i * 3) % 8).unwrap_or(0),
        low_celsius: 20 + i32::try_from((i * 5) % 6).unwrap_or(0),
        humidity_percent: 60 + u8::try_from((i * 7) % 30).unwrap_or(0),
        rainfall_mm,
        wind_speed_kmh: 8 + (i * 3) % 10,
        condition,
        uv_index: 3 + u8::try_from((i * 2) % 6).unwrap_or(0),
    }
}

/// Fixed advice shown on the weather page when a farm profile exists.
#[must_use]
pub fn placeholder_advice() -> FarmingAdvice {
    FarmingAdvice {
        immediate_actions: owned(&[
            "Check drainage systems before expected heavy rains this week",
            "Harvest mature tomatoes within 48 hours to avoid rain damage",
            "Apply organic mulch around pepper plants to retain soil moisture",
        ]),
        crop_care: owned(&[
            "Monitor tomato plants for early blight symptoms due to high humidity",
            "Increase ventilation in covered growing areas",
            "Apply potassium-rich fertilizer to strengthen plant cell walls",
        ]),
        water_management: owned(&[
            "Reduce watering frequency by 30% due to expected rainfall",
            "Clean gutters and water collection systems before rains",
            "Check irrigation timers and adjust for weather conditions",
        ]),
        timing_recommendations: owned(&[
            "Ideal time to plant sweet potato cuttings: next Tuesday morning",
            "Delay planting of new tomato seedlings until after rainy period",
            "Plan soil preparation activities for the weekend when weather clears",
        ]),
        risk_mitigation: owned(&[
            "Install temporary shade cloth for heat-sensitive crops",
            "Prepare emergency drainage channels in low-lying areas",
            "Stock up on organic fungicide for potential disease outbreaks",
        ]),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
