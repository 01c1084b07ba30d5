//! Weather page: stored insights plus the simulated feed.

use agro_config::WeatherConfig;
use agro_core::entities::{Farm, WeatherInsight};
use agro_core::responses::{CurrentWeather, ForecastDay, WeatherView};
use agro_store::SortOrder;
use chrono::Utc;

use super::{Loader, PageController, StoreHandle};
use crate::error::AppError;
use crate::pipelines::insights::critical_alerts;
use crate::weather::{WeatherFeed, placeholder_advice};

#[derive(Debug, Clone)]
pub struct WeatherData {
    pub insights: Vec<WeatherInsight>,
    pub farm: Option<Farm>,
    pub location: String,
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
}

pub struct WeatherController {
    store: StoreHandle,
    loader: Loader<WeatherData>,
    feed: WeatherFeed,
    default_state: String,
}

impl WeatherController {
    /// `default_state` is used for the feed when no farm is set up.
    #[must_use]
    pub fn new(store: StoreHandle, config: WeatherConfig, default_state: impl Into<String>) -> Self {
        Self {
            store,
            loader: Loader::default(),
            feed: WeatherFeed::new(config),
            default_state: default_state.into(),
        }
    }

    fn location_for(&self, farm: Option<&Farm>) -> String {
        farm.map(|f| f.state.trim())
            .filter(|state| !state.is_empty())
            .map_or_else(|| self.default_state.clone(), ToString::to_string)
    }

    async fn fetch_weather(&self, location: &str) -> (CurrentWeather, Vec<ForecastDay>) {
        let current = self.feed.current(location).await;
        let forecast = self
            .feed
            .forecast(location, Utc::now().date_naive())
            .await;
        (current, forecast)
    }

    /// Re-run the weather feed only; stored insights and the farm are kept.
    /// Falls back to a full load when nothing is held yet.
    pub async fn refresh(&mut self) -> bool {
        let Some(held) = self.loader.data().cloned() else {
            return self.load().await;
        };
        let ticket = self.begin_load();
        let (current, forecast) = self.fetch_weather(&held.location).await;
        self.finish_load(
            ticket,
            Ok(WeatherData {
                current,
                forecast,
                ..held
            }),
        )
    }

    #[must_use]
    pub fn view(&self) -> Option<WeatherView> {
        let data = self.loader.data()?;
        Some(WeatherView {
            farm: data.farm.clone(),
            location: data.location.clone(),
            insights: data.insights.clone(),
            alerts: critical_alerts(&data.insights),
            current: data.current.clone(),
            forecast: data.forecast.clone(),
            advice: data.farm.as_ref().map(|_| placeholder_advice()),
        })
    }
}

impl PageController for WeatherController {
    type Data = WeatherData;
    const PAGE: &'static str = "weather";

    fn loader(&self) -> &Loader<WeatherData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<WeatherData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<WeatherData, AppError> {
        let (insights, farm) = tokio::try_join!(
            self.store
                .list::<WeatherInsight>(SortOrder::NewestFirst, None),
            self.store.active_farm(),
        )?;
        let location = self.location_for(farm.as_ref());
        let (current, forecast) = self.fetch_weather(&location).await;
        Ok(WeatherData {
            insights,
            farm,
            location,
            current,
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bundled_store, empty_store};

    fn controller(store: StoreHandle) -> WeatherController {
        WeatherController::new(store, WeatherConfig::instant(), "Lagos")
    }

    #[tokio::test]
    async fn farm_state_drives_location_and_advice() {
        let mut weather = controller(bundled_store());
        assert!(weather.load().await);
        let view = weather.view().unwrap();
        assert_eq!(view.location, "Lagos");
        assert_eq!(view.current.location, "Lagos");
        assert_eq!(view.forecast.len(), 7);
        assert!(view.advice.is_some());
        assert!(
            view.insights
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );
    }

    #[tokio::test]
    async fn no_farm_means_default_state_and_no_advice() {
        let mut weather = WeatherController::new(empty_store(), WeatherConfig::instant(), "Kano");
        weather.load().await;
        let view = weather.view().unwrap();
        assert_eq!(view.location, "Kano");
        assert!(view.advice.is_none());
        assert!(view.farm.is_none());
    }

    #[tokio::test]
    async fn blank_farm_state_falls_back_to_default() {
        let store = bundled_store();
        let farm = store.active_farm().await.unwrap().unwrap();
        store
            .update::<Farm>(
                &farm.id,
                agro_store::updates::farm::FarmUpdateBuilder::new()
                    .state("  ")
                    .build(),
            )
            .await
            .unwrap();

        let mut weather = controller(store);
        assert!(weather.load().await);
        let view = weather.view().unwrap();
        assert_eq!(view.location, "Lagos");
        assert_eq!(view.current.location, "Lagos");
        assert!(view.farm.is_some());
    }

    #[tokio::test]
    async fn refresh_keeps_insights() {
        let store = bundled_store();
        let mut weather = controller(store.clone());
        weather.load().await;
        let before = weather.view().unwrap().insights;

        store
            .create::<WeatherInsight>(agro_store::repos::NewWeatherInsight {
                insight_type: agro_core::enums::InsightType::Other,
                severity: agro_core::enums::Severity::Low,
                title: "New".into(),
                description: String::new(),
                actions_recommended: Vec::new(),
                valid_until: None,
            })
            .await
            .unwrap();

        assert!(weather.refresh().await);
        assert_eq!(weather.view().unwrap().insights, before);
    }

    #[tokio::test]
    async fn refresh_before_load_does_full_load() {
        let mut weather = controller(bundled_store());
        assert!(weather.refresh().await);
        assert!(weather.view().is_some());
    }
}
