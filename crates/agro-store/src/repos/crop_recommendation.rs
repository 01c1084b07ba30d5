//! Crop recommendation records.

use agro_core::entities::{CropRecommendation, MAX_RESILIENCE_SCORE};
use agro_core::enums::{EntityType, Level, Season, SoilType};
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::record::Record;
use crate::store::AgroStore;
use crate::updates::crop_recommendation::CropRecommendationUpdate;

#[derive(Debug, Clone)]
pub struct NewCropRecommendation {
    pub crop_name: String,
    pub state: String,
    pub season: Season,
    pub water_requirement: Level,
    pub market_potential: Level,
    pub climate_resilience_score: u8,
    pub planting_tips: String,
    pub expected_yield: Option<String>,
    pub suitable_soil_types: Option<Vec<SoilType>>,
}

impl Record for CropRecommendation {
    const ENTITY: EntityType = EntityType::CropRecommendation;
    type Draft = NewCropRecommendation;
    type Update = CropRecommendationUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewCropRecommendation) -> Self {
        Self {
            id,
            crop_name: draft.crop_name,
            state: draft.state,
            season: draft.season,
            water_requirement: draft.water_requirement,
            market_potential: draft.market_potential,
            climate_resilience_score: draft.climate_resilience_score,
            planting_tips: draft.planting_tips,
            expected_yield: draft.expected_yield,
            suitable_soil_types: draft.suitable_soil_types,
            created_at: now,
        }
    }

    fn apply_update(
        &mut self,
        update: CropRecommendationUpdate,
        _now: DateTime<Utc>,
    ) -> Result<(), String> {
        if let Some(v) = update.crop_name {
            self.crop_name = v;
        }
        if let Some(v) = update.state {
            self.state = v;
        }
        if let Some(v) = update.season {
            self.season = v;
        }
        if let Some(v) = update.water_requirement {
            self.water_requirement = v;
        }
        if let Some(v) = update.market_potential {
            self.market_potential = v;
        }
        if let Some(v) = update.climate_resilience_score {
            self.climate_resilience_score = v;
        }
        if let Some(v) = update.planting_tips {
            self.planting_tips = v;
        }
        if let Some(v) = update.expected_yield {
            self.expected_yield = v;
        }
        if let Some(v) = update.suitable_soil_types {
            self.suitable_soil_types = v;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), String> {
        if self.climate_resilience_score > MAX_RESILIENCE_SCORE {
            return Err(format!(
                "climate_resilience_score must be 0..={MAX_RESILIENCE_SCORE}, got {}",
                self.climate_resilience_score
            ));
        }
        Ok(())
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.crop_recommendations()
    }
}
