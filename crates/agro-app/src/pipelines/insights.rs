//! Dashboard selections over weather insights and recommendations.

use agro_core::entities::{CropRecommendation, WeatherInsight};
use agro_core::responses::{CriticalAlerts, QuickInsights};

use super::recommendations::top_by_score;

/// How many recommendations the quick-insights panel shows.
pub const QUICK_RECOMMENDATIONS: usize = 2;

/// Insights with high or critical severity, in input order.
#[must_use]
pub fn alerting(insights: &[WeatherInsight]) -> Vec<WeatherInsight> {
    insights
        .iter()
        .filter(|i| i.severity.is_alerting())
        .cloned()
        .collect()
}

/// Alert count plus the banner item: the first alerting insight in list
/// order. A later critical insight does not displace an earlier high one.
#[must_use]
pub fn critical_alerts(insights: &[WeatherInsight]) -> CriticalAlerts {
    let alerts = alerting(insights);
    CriticalAlerts {
        count: alerts.len(),
        banner: alerts.into_iter().next(),
    }
}

/// Top recommendations by score and the first planting/harvest timing insight.
#[must_use]
pub fn quick_insights(
    recommendations: &[CropRecommendation],
    insights: &[WeatherInsight],
) -> QuickInsights {
    QuickInsights {
        top_recommendations: top_by_score(recommendations, QUICK_RECOMMENDATIONS),
        timing_insight: insights
            .iter()
            .find(|i| i.insight_type.is_actionable_timing())
            .cloned(),
    }
}
