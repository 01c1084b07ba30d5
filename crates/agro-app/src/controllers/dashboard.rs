//! Dashboard: farm overview, latest insights, and quick picks.

use agro_core::entities::{CropRecommendation, Farm, WeatherInsight};
use agro_core::responses::DashboardView;
use agro_store::SortOrder;

use super::{Loader, PageController, StoreHandle};
use crate::error::AppError;
use crate::pipelines::insights::{critical_alerts, quick_insights};
use crate::routes::{Page, resolve};

/// Newest insights the dashboard pulls.
pub const RECENT_INSIGHTS: usize = 5;
/// Newest recommendations the dashboard pulls.
pub const RECENT_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct DashboardData {
    pub farm: Option<Farm>,
    pub insights: Vec<WeatherInsight>,
    pub recommendations: Vec<CropRecommendation>,
}

pub struct DashboardController {
    store: StoreHandle,
    loader: Loader<DashboardData>,
}

impl DashboardController {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            loader: Loader::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> Option<DashboardView> {
        let data = self.loader.data()?;
        Some(DashboardView {
            farm: data.farm.clone(),
            recent_insights: data.insights.clone(),
            recent_recommendations: data.recommendations.clone(),
            alerts: critical_alerts(&data.insights),
            quick_insights: quick_insights(&data.recommendations, &data.insights),
            setup_link: data
                .farm
                .is_none()
                .then(|| resolve(Page::Profile.name(), Vec::<(&str, &str)>::new())),
        })
    }
}

impl PageController for DashboardController {
    type Data = DashboardData;
    const PAGE: &'static str = "dashboard";

    fn loader(&self) -> &Loader<DashboardData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<DashboardData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<DashboardData, AppError> {
        let store = &self.store;
        let (farm, insights, recommendations) = tokio::try_join!(
            store.active_farm(),
            store.list::<WeatherInsight>(SortOrder::NewestFirst, Some(RECENT_INSIGHTS)),
            store.list::<CropRecommendation>(SortOrder::NewestFirst, Some(RECENT_RECOMMENDATIONS)),
        )?;
        Ok(DashboardData {
            farm,
            insights,
            recommendations,
        })
    }
}
