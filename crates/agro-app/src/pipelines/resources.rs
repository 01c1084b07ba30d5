//! Learning resource filtering, search, and summaries.

use agro_core::entities::Resource;
use agro_core::enums::{DifficultyLevel, ResourceCategory, ResourceType};
use agro_core::responses::CategoryCount;
use serde::Serialize;

use super::contains_ignore_case;
use crate::criteria::Choice;

/// How many featured resources the featured strip shows.
pub const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceCriteria {
    pub category: Choice<ResourceCategory>,
    pub resource_type: Choice<ResourceType>,
    pub difficulty_level: Choice<DifficultyLevel>,
    /// Free-text search; empty means no search.
    pub search: String,
}

impl ResourceCriteria {
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !(self.category.is_all() && self.resource_type.is_all() && self.difficulty_level.is_all())
    }
}

/// Whether `term_lower` occurs in the title, the description, or any tag.
/// The category is not searched.
#[must_use]
pub fn matches_search(resource: &Resource, term_lower: &str) -> bool {
    contains_ignore_case(&resource.title, term_lower)
        || contains_ignore_case(&resource.description, term_lower)
        || resource
            .tags
            .iter()
            .any(|tag| contains_ignore_case(tag, term_lower))
}

/// Search AND every structured axis. Input order is kept.
#[must_use]
pub fn apply(resources: &[Resource], criteria: &ResourceCriteria) -> Vec<Resource> {
    let term = criteria.search.to_lowercase();
    resources
        .iter()
        .filter(|r| term.is_empty() || matches_search(r, &term))
        .filter(|r| criteria.category.admits(&r.category))
        .filter(|r| criteria.resource_type.admits(&r.resource_type))
        .filter(|r| criteria.difficulty_level.admits(&r.difficulty_level))
        .cloned()
        .collect()
}

/// The first few featured resources in input order.
#[must_use]
pub fn featured(resources: &[Resource]) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| r.is_featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

/// Resource count per category, in category declaration order. Categories
/// with no resources are omitted.
#[must_use]
pub fn category_stats(resources: &[Resource]) -> Vec<CategoryCount> {
    ResourceCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: resources.iter().filter(|r| r.category == category).count(),
        })
        .filter(|c| c.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn resource(
        id: &str,
        title: &str,
        description: &str,
        tags: &[&str],
        category: ResourceCategory,
        featured: bool,
    ) -> Resource {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content: String::new(),
            category,
            resource_type: ResourceType::Guide,
            difficulty_level: DifficultyLevel::Beginner,
            tags: tags.iter().map(ToString::to_string).collect(),
            author: None,
            image_url: None,
            external_url: None,
            read_time_minutes: 5,
            views_count: 0,
            likes_count: 0,
            is_featured: featured,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn library() -> Vec<Resource> {
        vec![
            resource(
                "r1",
                "Drip Lines on a Budget",
                "Low-cost irrigation.",
                &["irrigation"],
                ResourceCategory::WaterManagement,
                true,
            ),
            resource(
                "r2",
                "Composting 101",
                "Feed your soil.",
                &["Organic", "soil"],
                ResourceCategory::SoilHealth,
                true,
            ),
            resource(
                "r3",
                "Reading the sky",
                "Spot WATERLOGGING risk early.",
                &[],
                ResourceCategory::ClimateAdaptation,
                false,
            ),
            resource(
                "r4",
                "Fall armyworm",
                "Scout maize weekly.",
                &["pests"],
                ResourceCategory::PestControl,
                true,
            ),
            resource(
                "r5",
                "Mulching",
                "Keep moisture in.",
                &[],
                ResourceCategory::SoilHealth,
                true,
            ),
        ]
    }

    fn ids(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[rstest]
    #[case("DRIP", vec!["r1"])]
    #[case("waterlogging", vec!["r3"])]
    #[case("organic", vec!["r2"])]
    #[case("soil", vec!["r2"])]
    #[case("", vec!["r1", "r2", "r3", "r4", "r5"])]
    fn search_is_case_insensitive_over_title_description_tags(
        #[case] term: &str,
        #[case] expected: Vec<&str>,
    ) {
        let criteria = ResourceCriteria {
            search: term.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&library(), &criteria)), expected);
    }

    #[test]
    fn category_label_is_not_searched() {
        let only = vec![resource(
            "w",
            "Canal upkeep",
            "Clear silt before planting.",
            &["canals"],
            ResourceCategory::WaterManagement,
            false,
        )];
        let criteria = ResourceCriteria {
            search: "water".to_string(),
            ..Default::default()
        };
        assert!(apply(&only, &criteria).is_empty());
    }

    #[test]
    fn search_and_filters_are_conjunctive() {
        let criteria = ResourceCriteria {
            category: Choice::Only(ResourceCategory::SoilHealth),
            search: "moisture".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&library(), &criteria)), vec!["r5"]);
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn featured_takes_first_three_in_order() {
        assert_eq!(ids(&featured(&library())), vec!["r1", "r2", "r4"]);
    }

    #[test]
    fn category_stats_counts_present_categories() {
        let stats = category_stats(&library());
        let soil = stats
            .iter()
            .find(|c| c.category == ResourceCategory::SoilHealth)
            .unwrap();
        assert_eq!(soil.count, 2);
        assert_eq!(stats.iter().map(|c| c.count).sum::<usize>(), 5);
        assert!(stats.iter().all(|c| c.count > 0));
    }
}
