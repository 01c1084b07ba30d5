use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Level, Season, SoilType};

/// Upper bound of `climate_resilience_score`.
pub const MAX_RESILIENCE_SCORE: u8 = 10;

/// A climate-smart crop suggestion for a state and season.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CropRecommendation {
    pub id: String,
    pub crop_name: String,
    pub state: String,
    pub season: Season,
    pub water_requirement: Level,
    pub market_potential: Level,
    /// 0..=10, validated when fixtures are loaded.
    pub climate_resilience_score: u8,
    pub planting_tips: String,
    pub expected_yield: Option<String>,
    pub suitable_soil_types: Option<Vec<SoilType>>,
    pub created_at: DateTime<Utc>,
}
