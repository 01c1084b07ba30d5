//! View-models serialize to documents their own JSON Schema accepts.

use agro_core::entities::{CropRecommendation, User, WeatherInsight};
use agro_core::enums::{
    FlashKind, InsightType, Level, ResilienceTier, Season, Severity, WeatherCondition,
};
use agro_core::responses::{
    CriticalAlerts, DashboardView, FlashMessage, ForecastDay, ProfileView, QuickInsights,
    RankedRecommendation,
};
use chrono::{NaiveDate, TimeZone, Utc};
use schemars::{JsonSchema, schema_for};
use serde::Serialize;

fn assert_schema_valid<T: JsonSchema + Serialize>(value: &T) -> serde_json::Value {
    let schema = serde_json::to_value(schema_for!(T)).unwrap();
    let instance = serde_json::to_value(value).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    let errors: Vec<String> = validator.iter_errors(&instance).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
    instance
}

fn insight(id: &str, severity: Severity) -> WeatherInsight {
    WeatherInsight {
        id: id.into(),
        insight_type: InsightType::TemperatureAlert,
        severity,
        title: "Heat stress".into(),
        description: "Shade seedlings.".into(),
        actions_recommended: vec![],
        valid_until: None,
        created_at: Utc.with_ymd_and_hms(2025, 6, 7, 6, 0, 0).unwrap(),
    }
}

fn recommendation() -> CropRecommendation {
    CropRecommendation {
        id: "rec-b2000001".into(),
        crop_name: "Cassava".into(),
        state: "Ogun".into(),
        season: Season::WetSeason,
        water_requirement: Level::Low,
        market_potential: Level::High,
        climate_resilience_score: 9,
        planting_tips: "Use healthy stems.".into(),
        expected_yield: Some("20 t/ha".into()),
        suitable_soil_types: None,
        created_at: Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap(),
    }
}

#[test]
fn dashboard_without_farm_carries_setup_link() {
    let view = DashboardView {
        farm: None,
        recent_insights: vec![insight("wxi-1", Severity::High)],
        recent_recommendations: vec![recommendation()],
        alerts: CriticalAlerts {
            count: 1,
            banner: Some(insight("wxi-1", Severity::High)),
        },
        quick_insights: QuickInsights {
            top_recommendations: vec![recommendation()],
            timing_insight: None,
        },
        setup_link: Some("/profile".into()),
    };
    let json = assert_schema_valid(&view);
    assert_eq!(json["farm"], serde_json::Value::Null);
    assert_eq!(json["alerts"]["banner"]["severity"], "high");
}

#[test]
fn ranked_recommendation_is_flat() {
    let ranked = RankedRecommendation {
        recommendation: recommendation(),
        tier: ResilienceTier::Strong,
    };
    let json = assert_schema_valid(&ranked);
    assert_eq!(json["crop_name"], "Cassava");
    assert_eq!(json["tier"], "strong");
}

#[test]
fn forecast_day_dates_are_plain_dates() {
    let day = ForecastDay {
        date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
        high_celsius: 31,
        low_celsius: 22,
        humidity_percent: 67,
        rainfall_mm: 6,
        wind_speed_kmh: 11,
        condition: WeatherCondition::Rainy,
        uv_index: 5,
    };
    let json = assert_schema_valid(&day);
    assert_eq!(json["date"], "2025-06-09");
    assert_eq!(json["condition"], "rainy");
}

#[test]
fn profile_flash_message_serializes_kind() {
    let view = ProfileView {
        user: User {
            id: "usr-1f2e3d4c".into(),
            email: "adebayo.ogunleye@example.com".into(),
            full_name: "Adebayo Ogunleye".into(),
            phone: None,
            bio: None,
            role: "farmer".into(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 10, 8, 55, 0).unwrap(),
        },
        farm: None,
        message: Some(FlashMessage {
            kind: FlashKind::Success,
            text: "Farm profile saved successfully!".into(),
        }),
    };
    let json = assert_schema_valid(&view);
    assert_eq!(json["message"]["kind"], "success");
}
