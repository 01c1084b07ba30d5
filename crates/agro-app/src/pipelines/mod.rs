//! Pure filter/sort pipelines.
//!
//! Every pipeline takes a borrowed collection plus criteria and returns a
//! new vector; the input is never reordered or mutated, so re-running a
//! pipeline on the same input always yields the same output.

pub mod forum;
pub mod insights;
pub mod recommendations;
pub mod resources;

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
