//! Crop recommendation update builder.

use agro_core::enums::{Level, Season, SoilType};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CropRecommendationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_requirement: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_potential: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate_resilience_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_soil_types: Option<Option<Vec<SoilType>>>,
}

pub struct CropRecommendationUpdateBuilder(CropRecommendationUpdate);

impl CropRecommendationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CropRecommendationUpdate::default())
    }

    #[must_use]
    pub fn crop_name(mut self, crop_name: impl Into<String>) -> Self {
        self.0.crop_name = Some(crop_name.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.0.state = Some(state.into());
        self
    }

    #[must_use]
    pub const fn water_requirement(mut self, level: Level) -> Self {
        self.0.water_requirement = Some(level);
        self
    }

    #[must_use]
    pub const fn market_potential(mut self, level: Level) -> Self {
        self.0.market_potential = Some(level);
        self
    }

    #[must_use]
    pub const fn season(mut self, season: Season) -> Self {
        self.0.season = Some(season);
        self
    }

    #[must_use]
    pub const fn climate_resilience_score(mut self, score: u8) -> Self {
        self.0.climate_resilience_score = Some(score);
        self
    }

    #[must_use]
    pub fn planting_tips(mut self, tips: impl Into<String>) -> Self {
        self.0.planting_tips = Some(tips.into());
        self
    }

    #[must_use]
    pub fn expected_yield(mut self, expected_yield: Option<String>) -> Self {
        self.0.expected_yield = Some(expected_yield);
        self
    }

    #[must_use]
    pub fn suitable_soil_types(mut self, soils: Option<Vec<SoilType>>) -> Self {
        self.0.suitable_soil_types = Some(soils);
        self
    }

    #[must_use]
    pub fn build(self) -> CropRecommendationUpdate {
        self.0
    }
}

impl Default for CropRecommendationUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
