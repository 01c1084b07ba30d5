//! Closed enumerations for every category, type, and level field.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the fixture documents. Enums whose values are ranked (severity,
//! difficulty, water/market levels) derive `Ord` with variants declared from
//! lowest to highest.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Parse a `snake_case` enum value using serde deserialization.
///
/// Hyphens are accepted in place of underscores (`"case-study"`).
///
/// # Errors
///
/// Returns `CoreError::InvalidValue` if `raw` does not name a variant.
pub fn parse_enum<T: DeserializeOwned>(raw: &str, field: &str) -> Result<T, CoreError> {
    let normalized = raw.trim().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized)).map_err(|_| {
        CoreError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
        }
    })
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// The seven collections owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Farm,
    WeatherInsight,
    CropRecommendation,
    Resource,
    ForumPost,
    ForumReply,
    User,
}

impl EntityType {
    pub const ALL: &'static [Self] = &[
        Self::Farm,
        Self::WeatherInsight,
        Self::CropRecommendation,
        Self::Resource,
        Self::ForumPost,
        Self::ForumReply,
        Self::User,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farm => "farm",
            Self::WeatherInsight => "weather_insight",
            Self::CropRecommendation => "crop_recommendation",
            Self::Resource => "resource",
            Self::ForumPost => "forum_post",
            Self::ForumReply => "forum_reply",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SoilType
// ---------------------------------------------------------------------------

/// Dominant soil of a farm, also used to describe where a crop does well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    Rocky,
    Mixed,
}

impl SoilType {
    pub const ALL: &'static [Self] = &[
        Self::Clay,
        Self::Sandy,
        Self::Loam,
        Self::Silt,
        Self::Rocky,
        Self::Mixed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clay => "clay",
            Self::Sandy => "sandy",
            Self::Loam => "loam",
            Self::Silt => "silt",
            Self::Rocky => "rocky",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InsightType
// ---------------------------------------------------------------------------

/// Kind of weather insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    RainfallForecast,
    TemperatureAlert,
    DroughtWarning,
    PlantingWindow,
    HarvestTiming,
    Other,
}

impl InsightType {
    /// Insights that tell the farmer when to act in the field.
    #[must_use]
    pub const fn is_actionable_timing(self) -> bool {
        matches!(self, Self::PlantingWindow | Self::HarvestTiming)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RainfallForecast => "rainfall_forecast",
            Self::TemperatureAlert => "temperature_alert",
            Self::DroughtWarning => "drought_warning",
            Self::PlantingWindow => "planting_window",
            Self::HarvestTiming => "harvest_timing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a weather insight.
///
/// ```text
/// low < medium < high < critical
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// `high` and `critical` insights raise the dashboard alert banner.
    #[must_use]
    pub const fn is_alerting(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Growing season a crop recommendation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    WetSeason,
    DrySeason,
    YearRound,
}

impl Season {
    pub const ALL: &'static [Self] = &[Self::WetSeason, Self::DrySeason, Self::YearRound];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WetSeason => "wet_season",
            Self::DrySeason => "dry_season",
            Self::YearRound => "year_round",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Three-step scale used for water requirement and market potential.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ForumCategory
// ---------------------------------------------------------------------------

/// Topic of a community forum post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ForumCategory {
    CropManagement,
    ClimateAdaptation,
    MarketPrices,
    PestControl,
    SoilHealth,
    Irrigation,
    General,
}

impl ForumCategory {
    pub const ALL: &'static [Self] = &[
        Self::CropManagement,
        Self::ClimateAdaptation,
        Self::MarketPrices,
        Self::PestControl,
        Self::SoilHealth,
        Self::Irrigation,
        Self::General,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CropManagement => "crop_management",
            Self::ClimateAdaptation => "climate_adaptation",
            Self::MarketPrices => "market_prices",
            Self::PestControl => "pest_control",
            Self::SoilHealth => "soil_health",
            Self::Irrigation => "irrigation",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ForumCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceCategory
// ---------------------------------------------------------------------------

/// Subject area of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    ClimateAdaptation,
    CropManagement,
    SoilHealth,
    WaterManagement,
    PestControl,
    MarketKnowledge,
    Technology,
    Sustainability,
}

impl ResourceCategory {
    pub const ALL: &'static [Self] = &[
        Self::ClimateAdaptation,
        Self::CropManagement,
        Self::SoilHealth,
        Self::WaterManagement,
        Self::PestControl,
        Self::MarketKnowledge,
        Self::Technology,
        Self::Sustainability,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClimateAdaptation => "climate_adaptation",
            Self::CropManagement => "crop_management",
            Self::SoilHealth => "soil_health",
            Self::WaterManagement => "water_management",
            Self::PestControl => "pest_control",
            Self::MarketKnowledge => "market_knowledge",
            Self::Technology => "technology",
            Self::Sustainability => "sustainability",
        }
    }

    /// Human-readable label shown next to filter options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClimateAdaptation => "Climate Adaptation",
            Self::CropManagement => "Crop Management",
            Self::SoilHealth => "Soil Health",
            Self::WaterManagement => "Water Management",
            Self::PestControl => "Pest Control",
            Self::MarketKnowledge => "Market Knowledge",
            Self::Technology => "Technology",
            Self::Sustainability => "Sustainability",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

/// Format of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Article,
    Video,
    Infographic,
    Checklist,
    Guide,
    CaseStudy,
}

impl ResourceType {
    pub const ALL: &'static [Self] = &[
        Self::Article,
        Self::Guide,
        Self::Video,
        Self::Infographic,
        Self::Checklist,
        Self::CaseStudy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Infographic => "infographic",
            Self::Checklist => "checklist",
            Self::Guide => "guide",
            Self::CaseStudy => "case_study",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DifficultyLevel
// ---------------------------------------------------------------------------

/// Reading level of a learning resource.
///
/// ```text
/// beginner < intermediate < advanced
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

/// Monotonic engagement counters that the store increments in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    LikesCount,
    ViewsCount,
    RepliesCount,
}

impl Counter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LikesCount => "likes_count",
            Self::ViewsCount => "views_count",
            Self::RepliesCount => "replies_count",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResilienceTier
// ---------------------------------------------------------------------------

/// Coarse bucket of a 0..=10 climate resilience score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResilienceTier {
    Limited,
    Moderate,
    Strong,
}

impl ResilienceTier {
    /// `>= 8` is strong, `>= 6` moderate, anything lower limited.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            8.. => Self::Strong,
            6..=7 => Self::Moderate,
            _ => Self::Limited,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for ResilienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WeatherCondition
// ---------------------------------------------------------------------------

/// Sky condition reported by the simulated weather feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: &'static [Self] = &[Self::Sunny, Self::PartlyCloudy, Self::Cloudy, Self::Rainy];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FlashKind
// ---------------------------------------------------------------------------

/// Tone of a transient status message shown after a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let json = serde_json::to_string(&$variant).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let parsed: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, $variant);
            }
        };
    }

    test_serde_roundtrip!(soil_loam, SoilType, SoilType::Loam, "loam");
    test_serde_roundtrip!(
        insight_planting_window,
        InsightType,
        InsightType::PlantingWindow,
        "planting_window"
    );
    test_serde_roundtrip!(severity_critical, Severity, Severity::Critical, "critical");
    test_serde_roundtrip!(season_year_round, Season, Season::YearRound, "year_round");
    test_serde_roundtrip!(
        forum_market_prices,
        ForumCategory,
        ForumCategory::MarketPrices,
        "market_prices"
    );
    test_serde_roundtrip!(
        resource_category_water,
        ResourceCategory,
        ResourceCategory::WaterManagement,
        "water_management"
    );
    test_serde_roundtrip!(
        resource_type_case_study,
        ResourceType,
        ResourceType::CaseStudy,
        "case_study"
    );
    test_serde_roundtrip!(
        condition_partly_cloudy,
        WeatherCondition,
        WeatherCondition::PartlyCloudy,
        "partly_cloudy"
    );
    test_serde_roundtrip!(counter_views, Counter, Counter::ViewsCount, "views_count");

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn difficulty_is_ordered() {
        assert!(DifficultyLevel::Beginner < DifficultyLevel::Advanced);
        assert!(Level::Low < Level::High);
    }

    #[test]
    fn alerting_severities() {
        assert!(Severity::High.is_alerting());
        assert!(Severity::Critical.is_alerting());
        assert!(!Severity::Medium.is_alerting());
        assert!(!Severity::Low.is_alerting());
    }

    #[test]
    fn actionable_timing_insights() {
        assert!(InsightType::PlantingWindow.is_actionable_timing());
        assert!(InsightType::HarvestTiming.is_actionable_timing());
        assert!(!InsightType::DroughtWarning.is_actionable_timing());
    }

    #[test]
    fn closed_sets_have_expected_sizes() {
        assert_eq!(ForumCategory::ALL.len(), 7);
        assert_eq!(ResourceCategory::ALL.len(), 8);
        assert_eq!(ResourceType::ALL.len(), 6);
        assert_eq!(SoilType::ALL.len(), 6);
    }

    #[test]
    fn resilience_tier_boundaries() {
        assert_eq!(ResilienceTier::from_score(10), ResilienceTier::Strong);
        assert_eq!(ResilienceTier::from_score(8), ResilienceTier::Strong);
        assert_eq!(ResilienceTier::from_score(7), ResilienceTier::Moderate);
        assert_eq!(ResilienceTier::from_score(6), ResilienceTier::Moderate);
        assert_eq!(ResilienceTier::from_score(5), ResilienceTier::Limited);
        assert_eq!(ResilienceTier::from_score(0), ResilienceTier::Limited);
    }

    #[test]
    fn parse_enum_accepts_hyphens() {
        let t: ResourceType = parse_enum("case-study", "resource_type").unwrap();
        assert_eq!(t, ResourceType::CaseStudy);
    }

    #[test]
    fn parse_enum_rejects_unknown() {
        let err = parse_enum::<Season>("monsoon", "season").unwrap_err();
        assert_eq!(err.to_string(), "Invalid season 'monsoon'");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", InsightType::HarvestTiming), "harvest_timing");
        assert_eq!(format!("{}", Severity::High), "high");
        assert_eq!(format!("{}", Season::WetSeason), "wet_season");
        assert_eq!(format!("{}", ForumCategory::SoilHealth), "soil_health");
        assert_eq!(format!("{}", DifficultyLevel::Intermediate), "intermediate");
        assert_eq!(format!("{}", EntityType::ForumReply), "forum_reply");
    }
}
