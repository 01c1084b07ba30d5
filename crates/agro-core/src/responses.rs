//! Page view-models handed from controllers to renderers.
//!
//! These are the already-computed shapes a page displays: controllers fill
//! them from store data and pipeline output, and `agro` prints them as JSON
//! or tables. None of them carry behavior.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    CropRecommendation, Farm, ForumPost, ForumReply, Resource, User, WeatherInsight,
};
use crate::enums::{FlashKind, ResilienceTier, ResourceCategory, WeatherCondition};

/// High/critical weather insights and the one surfaced as a banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CriticalAlerts {
    pub count: usize,
    /// First alerting insight in list order, if any.
    pub banner: Option<WeatherInsight>,
}

/// Dashboard side panel: best-rated crops and the next timing insight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuickInsights {
    pub top_recommendations: Vec<CropRecommendation>,
    pub timing_insight: Option<WeatherInsight>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardView {
    pub farm: Option<Farm>,
    pub recent_insights: Vec<WeatherInsight>,
    pub recent_recommendations: Vec<CropRecommendation>,
    pub alerts: CriticalAlerts,
    pub quick_insights: QuickInsights,
    /// Link to the profile page, present only while no farm is set up.
    pub setup_link: Option<String>,
}

/// A recommendation paired with its resilience bucket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedRecommendation {
    #[serde(flatten)]
    pub recommendation: CropRecommendation,
    pub tier: ResilienceTier,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationsView {
    pub farm: Option<Farm>,
    pub total: usize,
    pub recommendations: Vec<RankedRecommendation>,
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CurrentWeather {
    pub location: String,
    pub temperature_celsius: i32,
    pub feels_like_celsius: i32,
    pub humidity_percent: u8,
    pub wind_speed_kmh: u32,
    pub visibility_km: u32,
    pub uv_index: u8,
    pub condition: WeatherCondition,
    pub description: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub high_celsius: i32,
    pub low_celsius: i32,
    pub humidity_percent: u8,
    pub rainfall_mm: u32,
    pub wind_speed_kmh: u32,
    pub condition: WeatherCondition,
    pub uv_index: u8,
}

/// Placeholder advice, grouped the way the weather page lays it out.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FarmingAdvice {
    pub immediate_actions: Vec<String>,
    pub crop_care: Vec<String>,
    pub water_management: Vec<String>,
    pub timing_recommendations: Vec<String>,
    pub risk_mitigation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeatherView {
    pub farm: Option<Farm>,
    pub location: String,
    pub insights: Vec<WeatherInsight>,
    pub alerts: CriticalAlerts,
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub advice: Option<FarmingAdvice>,
}

// ---------------------------------------------------------------------------
// Community
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForumView {
    pub user: Option<User>,
    pub farm_state: Option<String>,
    pub total: usize,
    pub posts: Vec<ForumPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostDetailsView {
    pub post: ForumPost,
    pub replies: Vec<ForumReply>,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: ResourceCategory,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourcesView {
    /// Size of the unfiltered collection.
    pub total: usize,
    pub resources: Vec<Resource>,
    pub featured: Vec<Resource>,
    pub category_stats: Vec<CategoryCount>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProfileView {
    pub user: User,
    pub farm: Option<Farm>,
    pub message: Option<FlashMessage>,
}

/// Output of `agro route`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RouteResponse {
    pub page: String,
    pub path: String,
}
