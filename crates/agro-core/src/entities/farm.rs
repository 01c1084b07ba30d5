use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SoilType;

/// A smallholder's farm profile.
///
/// The store keeps any number of farms; the profile page treats the first
/// one as the active farm for the session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Farm {
    pub id: String,
    pub farm_name: String,
    pub location: String,
    /// Administrative region, e.g. `"Kano"`.
    pub state: String,
    pub farm_size_hectares: f64,
    pub soil_type: SoilType,
    #[serde(default)]
    pub current_crops: Vec<String>,
    #[serde(default)]
    pub irrigation_available: bool,
    #[serde(default)]
    pub farming_experience_years: u32,
    pub created_at: DateTime<Utc>,
}
