//! Farm update builder.

use agro_core::enums::SoilType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FarmUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size_hectares: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<SoilType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_crops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farming_experience_years: Option<u32>,
}

pub struct FarmUpdateBuilder(FarmUpdate);

impl FarmUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FarmUpdate::default())
    }

    #[must_use]
    pub fn farm_name(mut self, farm_name: impl Into<String>) -> Self {
        self.0.farm_name = Some(farm_name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.0.state = Some(state.into());
        self
    }

    #[must_use]
    pub const fn farm_size_hectares(mut self, hectares: f64) -> Self {
        self.0.farm_size_hectares = Some(hectares);
        self
    }

    #[must_use]
    pub const fn soil_type(mut self, soil_type: SoilType) -> Self {
        self.0.soil_type = Some(soil_type);
        self
    }

    #[must_use]
    pub fn current_crops(mut self, crops: Vec<String>) -> Self {
        self.0.current_crops = Some(crops);
        self
    }

    #[must_use]
    pub const fn irrigation_available(mut self, available: bool) -> Self {
        self.0.irrigation_available = Some(available);
        self
    }

    #[must_use]
    pub const fn farming_experience_years(mut self, years: u32) -> Self {
        self.0.farming_experience_years = Some(years);
        self
    }

    #[must_use]
    pub fn build(self) -> FarmUpdate {
        self.0
    }
}

impl Default for FarmUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
