//! Weather insight records and the alert query.

use agro_core::entities::WeatherInsight;
use agro_core::enums::{EntityType, InsightType, Severity};
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::record::Record;
use crate::sort::SortOrder;
use crate::store::AgroStore;
use crate::updates::weather_insight::WeatherInsightUpdate;

#[derive(Debug, Clone)]
pub struct NewWeatherInsight {
    pub insight_type: InsightType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub actions_recommended: Vec<String>,
    pub valid_until: Option<DateTime<Utc>>,
}

impl Record for WeatherInsight {
    const ENTITY: EntityType = EntityType::WeatherInsight;
    type Draft = NewWeatherInsight;
    type Update = WeatherInsightUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewWeatherInsight) -> Self {
        Self {
            id,
            insight_type: draft.insight_type,
            severity: draft.severity,
            title: draft.title,
            description: draft.description,
            actions_recommended: draft.actions_recommended,
            valid_until: draft.valid_until,
            created_at: now,
        }
    }

    fn apply_update(
        &mut self,
        update: WeatherInsightUpdate,
        _now: DateTime<Utc>,
    ) -> Result<(), String> {
        if let Some(v) = update.insight_type {
            self.insight_type = v;
        }
        if let Some(v) = update.severity {
            self.severity = v;
        }
        if let Some(v) = update.title {
            self.title = v;
        }
        if let Some(v) = update.description {
            self.description = v;
        }
        if let Some(v) = update.actions_recommended {
            self.actions_recommended = v;
        }
        if let Some(v) = update.valid_until {
            self.valid_until = v;
        }
        Ok(())
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.weather_insights()
    }
}

impl AgroStore {
    /// Insights at or above `min_severity`, in `order`.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store.
    pub async fn insights_at_least(
        &self,
        min_severity: Severity,
        order: SortOrder,
    ) -> Result<Vec<WeatherInsight>, StoreError> {
        Ok(self
            .weather_insights()
            .filter(|i| i.severity >= min_severity, order)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_store;
    use crate::updates::weather_insight::WeatherInsightUpdateBuilder;

    #[tokio::test]
    async fn insights_at_least_high_keeps_storage_order() {
        let store = test_store();
        let alerts = store
            .insights_at_least(Severity::High, SortOrder::Insertion)
            .await
            .unwrap();
        let ids: Vec<&str> = alerts.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["wxi-a1000002", "wxi-a1000004"]);
    }

    #[tokio::test]
    async fn valid_until_can_be_cleared() {
        let store = AgroStore::empty();
        let created: WeatherInsight = store
            .create(NewWeatherInsight {
                insight_type: InsightType::RainfallForecast,
                severity: Severity::Medium,
                title: "Showers".into(),
                description: "Light showers expected.".into(),
                actions_recommended: Vec::new(),
                valid_until: Some(Utc::now()),
            })
            .await
            .unwrap();
        let update = WeatherInsightUpdateBuilder::new().valid_until(None).build();
        let updated: WeatherInsight = store.update(&created.id, update).await.unwrap();
        assert!(updated.valid_until.is_none());
        assert_eq!(updated.title, "Showers");
    }
}
