//! Crop recommendations with the four-axis filter bar.

use agro_core::entities::{CropRecommendation, Farm};
use agro_core::responses::RecommendationsView;
use agro_store::SortOrder;

use super::{Loader, PageController, StoreHandle};
use crate::criteria::Choice;
use crate::error::AppError;
use crate::pipelines::recommendations::{RecommendationCriteria, apply, rank};

#[derive(Debug, Clone)]
pub struct RecommendationsData {
    pub recommendations: Vec<CropRecommendation>,
    pub farm: Option<Farm>,
}

pub struct RecommendationsController {
    store: StoreHandle,
    loader: Loader<RecommendationsData>,
    criteria: RecommendationCriteria,
}

impl RecommendationsController {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            loader: Loader::default(),
            criteria: RecommendationCriteria::default(),
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &RecommendationCriteria {
        &self.criteria
    }

    /// Replace the criteria. Held data is re-filtered on the next `view`;
    /// nothing is re-fetched.
    pub fn set_criteria(&mut self, criteria: RecommendationCriteria) {
        self.criteria = criteria;
    }

    /// Narrow the state axis to the farm's state, if a farm is loaded.
    pub fn show_my_state(&mut self) -> bool {
        let Some(state) = self
            .loader
            .data()
            .and_then(|d| d.farm.as_ref())
            .map(|f| f.state.clone())
        else {
            return false;
        };
        self.criteria.state = Choice::Only(state);
        true
    }

    pub fn clear_filters(&mut self) {
        self.criteria = RecommendationCriteria::default();
    }

    #[must_use]
    pub fn view(&self) -> Option<RecommendationsView> {
        let data = self.loader.data()?;
        let filtered = apply(&data.recommendations, &self.criteria);
        Some(RecommendationsView {
            farm: data.farm.clone(),
            total: filtered.len(),
            recommendations: rank(filtered),
        })
    }
}

impl PageController for RecommendationsController {
    type Data = RecommendationsData;
    const PAGE: &'static str = "recommendations";

    fn loader(&self) -> &Loader<RecommendationsData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<RecommendationsData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<RecommendationsData, AppError> {
        let (recommendations, farm) = tokio::try_join!(
            self.store
                .list::<CropRecommendation>(SortOrder::Insertion, None),
            self.store.active_farm(),
        )?;
        Ok(RecommendationsData {
            recommendations,
            farm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bundled_store;
    use agro_core::enums::Level;

    #[tokio::test]
    async fn unfiltered_view_is_sorted_by_score() {
        let mut controller = RecommendationsController::new(bundled_store());
        controller.load().await;
        let view = controller.view().unwrap();
        assert_eq!(view.total, view.recommendations.len());
        assert!(
            view.recommendations
                .windows(2)
                .all(|w| w[0].recommendation.climate_resilience_score
                    >= w[1].recommendation.climate_resilience_score)
        );
    }

    #[tokio::test]
    async fn criteria_change_refilters_without_refetch() {
        let store = bundled_store();
        let mut controller = RecommendationsController::new(store.clone());
        controller.load().await;

        // Mutations after load are not visible until the next load.
        let extra = agro_store::repos::NewCropRecommendation {
            crop_name: "Soybean".into(),
            state: "Kano".into(),
            season: agro_core::enums::Season::WetSeason,
            water_requirement: Level::Low,
            market_potential: Level::High,
            climate_resilience_score: 8,
            planting_tips: String::new(),
            expected_yield: None,
            suitable_soil_types: None,
        };
        store.create::<CropRecommendation>(extra).await.unwrap();

        controller.set_criteria(RecommendationCriteria {
            state: Choice::text("Kano"),
            ..Default::default()
        });
        let view = controller.view().unwrap();
        assert!(view.recommendations.iter().all(|r| r.recommendation.state == "Kano"));
        assert!(
            view.recommendations
                .iter()
                .all(|r| r.recommendation.crop_name != "Soybean")
        );
    }

    #[tokio::test]
    async fn show_my_state_uses_farm_state() {
        let mut controller = RecommendationsController::new(bundled_store());
        assert!(!controller.show_my_state());
        controller.load().await;
        assert!(controller.show_my_state());
        assert_eq!(controller.criteria().state, Choice::Only("Lagos".to_string()));
        controller.clear_filters();
        assert!(controller.criteria().is_unfiltered());
    }
}
