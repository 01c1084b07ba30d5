//! Forum post filtering.

use agro_core::entities::ForumPost;
use agro_core::enums::ForumCategory;
use serde::Serialize;

use super::contains_ignore_case;
use crate::criteria::Choice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumCriteria {
    pub category: Choice<ForumCategory>,
    pub search: String,
}

/// Exact category match AND a case-insensitive search over title or
/// content. Input order is kept.
#[must_use]
pub fn apply(posts: &[ForumPost], criteria: &ForumCriteria) -> Vec<ForumPost> {
    let term = criteria.search.to_lowercase();
    posts
        .iter()
        .filter(|p| criteria.category.admits(&p.category))
        .filter(|p| contains_ignore_case(&p.title, &term) || contains_ignore_case(&p.content, &term))
        .cloned()
        .collect()
}
