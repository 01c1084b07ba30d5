use agro_app::catalog::{
    COMMON_CROPS, NIGERIAN_STATES, RECOMMENDATION_STATES, forum_category_options,
    resource_category_options,
};
use agro_core::enums::SoilType;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{OptionKind, OptionsArgs};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Choice {
    value: String,
    label: String,
}

impl Choice {
    fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

fn choices(kind: OptionKind) -> Vec<Choice> {
    match kind {
        OptionKind::States => NIGERIAN_STATES.iter().copied().map(Choice::plain).collect(),
        OptionKind::RecommendationStates => RECOMMENDATION_STATES
            .iter()
            .copied()
            .map(Choice::plain)
            .collect(),
        OptionKind::Crops => COMMON_CROPS.iter().copied().map(Choice::plain).collect(),
        OptionKind::SoilTypes => SoilType::ALL
            .iter()
            .map(|s| Choice::plain(s.as_str()))
            .collect(),
        OptionKind::ForumCategories => forum_category_options()
            .into_iter()
            .map(Choice::plain)
            .collect(),
        OptionKind::ResourceCategories => resource_category_options()
            .into_iter()
            .map(|(value, label)| Choice {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

/// Handle `agro options`.
pub fn handle(args: &OptionsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&choices(args.kind), flags.format)
}
