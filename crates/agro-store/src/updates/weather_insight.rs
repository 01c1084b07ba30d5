//! Weather insight update builder.

use agro_core::enums::{InsightType, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeatherInsightUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_type: Option<InsightType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_recommended: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<Option<DateTime<Utc>>>,
}

pub struct WeatherInsightUpdateBuilder(WeatherInsightUpdate);

impl WeatherInsightUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WeatherInsightUpdate::default())
    }

    #[must_use]
    pub const fn severity(mut self, severity: Severity) -> Self {
        self.0.severity = Some(severity);
        self
    }

    #[must_use]
    pub const fn insight_type(mut self, insight_type: InsightType) -> Self {
        self.0.insight_type = Some(insight_type);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn actions_recommended(mut self, actions: Vec<String>) -> Self {
        self.0.actions_recommended = Some(actions);
        self
    }

    #[must_use]
    pub const fn valid_until(mut self, valid_until: Option<DateTime<Utc>>) -> Self {
        self.0.valid_until = Some(valid_until);
        self
    }

    #[must_use]
    pub fn build(self) -> WeatherInsightUpdate {
        self.0
    }
}

impl Default for WeatherInsightUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
