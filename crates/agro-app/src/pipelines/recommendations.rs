//! Crop recommendation filtering and ranking.

use std::cmp::Reverse;

use agro_core::entities::CropRecommendation;
use agro_core::enums::{Level, ResilienceTier, Season};
use agro_core::responses::RankedRecommendation;
use serde::Serialize;

use crate::criteria::Choice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationCriteria {
    pub state: Choice<String>,
    pub season: Choice<Season>,
    pub water_requirement: Choice<Level>,
    pub market_potential: Choice<Level>,
}

impl RecommendationCriteria {
    /// All four axes must admit the record.
    #[must_use]
    pub fn matches(&self, rec: &CropRecommendation) -> bool {
        self.state.admits(&rec.state)
            && self.season.admits(&rec.season)
            && self.water_requirement.admits(&rec.water_requirement)
            && self.market_potential.admits(&rec.market_potential)
    }

    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.state.is_all()
            && self.season.is_all()
            && self.water_requirement.is_all()
            && self.market_potential.is_all()
    }
}

/// Stable sort by resilience score, highest first.
pub fn sort_by_score(recs: &mut [CropRecommendation]) {
    recs.sort_by_key(|r| Reverse(r.climate_resilience_score));
}

/// Filter by `criteria`, then rank by resilience score descending.
/// Records with equal scores keep their input order.
#[must_use]
pub fn apply(
    recs: &[CropRecommendation],
    criteria: &RecommendationCriteria,
) -> Vec<CropRecommendation> {
    let mut out: Vec<CropRecommendation> =
        recs.iter().filter(|r| criteria.matches(r)).cloned().collect();
    sort_by_score(&mut out);
    out
}

/// The first `n` records by score, ties in input order.
#[must_use]
pub fn top_by_score(recs: &[CropRecommendation], n: usize) -> Vec<CropRecommendation> {
    let mut ranked = recs.to_vec();
    sort_by_score(&mut ranked);
    ranked.truncate(n);
    ranked
}

/// Attach the resilience bucket to each record.
#[must_use]
pub fn rank(recs: Vec<CropRecommendation>) -> Vec<RankedRecommendation> {
    recs.into_iter()
        .map(|recommendation| RankedRecommendation {
            tier: ResilienceTier::from_score(recommendation.climate_resilience_score),
            recommendation,
        })
        .collect()
}
