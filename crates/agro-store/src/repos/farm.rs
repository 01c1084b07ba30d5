//! Farm records and the active-farm lookup.

use agro_core::entities::Farm;
use agro_core::enums::{EntityType, SoilType};
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::record::Record;
use crate::sort::SortOrder;
use crate::store::AgroStore;
use crate::updates::farm::FarmUpdate;

#[derive(Debug, Clone)]
pub struct NewFarm {
    pub farm_name: String,
    pub location: String,
    pub state: String,
    pub farm_size_hectares: f64,
    pub soil_type: SoilType,
    pub current_crops: Vec<String>,
    pub irrigation_available: bool,
    pub farming_experience_years: u32,
}

impl Record for Farm {
    const ENTITY: EntityType = EntityType::Farm;
    type Draft = NewFarm;
    type Update = FarmUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewFarm) -> Self {
        Self {
            id,
            farm_name: draft.farm_name,
            location: draft.location,
            state: draft.state,
            farm_size_hectares: draft.farm_size_hectares,
            soil_type: draft.soil_type,
            current_crops: draft.current_crops,
            irrigation_available: draft.irrigation_available,
            farming_experience_years: draft.farming_experience_years,
            created_at: now,
        }
    }

    fn apply_update(&mut self, update: FarmUpdate, _now: DateTime<Utc>) -> Result<(), String> {
        if let Some(v) = update.farm_name {
            self.farm_name = v;
        }
        if let Some(v) = update.location {
            self.location = v;
        }
        if let Some(v) = update.state {
            self.state = v;
        }
        if let Some(v) = update.farm_size_hectares {
            self.farm_size_hectares = v;
        }
        if let Some(v) = update.soil_type {
            self.soil_type = v;
        }
        if let Some(v) = update.current_crops {
            self.current_crops = v;
        }
        if let Some(v) = update.irrigation_available {
            self.irrigation_available = v;
        }
        if let Some(v) = update.farming_experience_years {
            self.farming_experience_years = v;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), String> {
        if !self.farm_size_hectares.is_finite() || self.farm_size_hectares < 0.0 {
            return Err(format!(
                "farm_size_hectares must be a non-negative number, got {}",
                self.farm_size_hectares
            ));
        }
        Ok(())
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.farms()
    }
}

impl AgroStore {
    /// The farm the session works with: the first one in storage order.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store.
    pub async fn active_farm(&self) -> Result<Option<Farm>, StoreError> {
        let mut farms = self.farms().list(SortOrder::Insertion, Some(1)).await;
        Ok(farms.pop())
    }
}
