//! Fixed option lists offered by the page forms and filter bars.

use agro_core::enums::{ForumCategory, ResourceCategory};

use crate::criteria::ALL;

/// The 36 states plus the Federal Capital Territory.
pub const NIGERIAN_STATES: &[&str] = &[
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

/// Quick-add suggestions on the farm form.
pub const COMMON_CROPS: &[&str] = &[
    "tomatoes",
    "peppers",
    "okra",
    "cassava",
    "yam",
    "plantain",
    "banana",
    "maize",
    "rice",
    "beans",
    "groundnuts",
    "sweet potato",
    "cocoyam",
    "pineapple",
    "mango",
    "citrus",
    "palm oil",
    "cocoa",
    "cotton",
    "millet",
    "sorghum",
    "cowpea",
];

/// States offered by the recommendations state filter, after "all".
pub const RECOMMENDATION_STATES: &[&str] = &["Lagos", "Kano", "Ogun", "Kaduna", "Rivers"];

/// Forum category tabs, `"all"` first.
#[must_use]
pub fn forum_category_options() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(ForumCategory::ALL.iter().map(|c| c.as_str()))
        .collect()
}

/// Resource category filter entries as `(value, label)`, `"all"` first.
#[must_use]
pub fn resource_category_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL, "All Categories"))
        .chain(ResourceCategory::ALL.iter().map(|c| (c.as_str(), c.label())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_list_is_complete() {
        assert_eq!(NIGERIAN_STATES.len(), 37);
        assert!(NIGERIAN_STATES.contains(&"FCT"));
    }

    #[test]
    fn recommendation_states_are_real_states() {
        for state in RECOMMENDATION_STATES {
            assert!(NIGERIAN_STATES.contains(state), "{state}");
        }
    }

    #[test]
    fn option_lists_lead_with_all() {
        let forum = forum_category_options();
        assert_eq!(forum.first(), Some(&"all"));
        assert_eq!(forum.len(), 8);

        let resources = resource_category_options();
        assert_eq!(resources[0].0, "all");
        assert_eq!(resources.len(), 9);
    }
}
