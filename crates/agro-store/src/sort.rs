//! Sort specifications accepted by `list`.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::error::StoreError;
use crate::record::Record;

/// Ordering applied before a `limit` truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Backing collection order (fixture order, then creation order).
    #[default]
    Insertion,
    /// Creation timestamp descending; `"-created_date"`.
    NewestFirst,
    /// Creation timestamp ascending; `"created_date"`.
    OldestFirst,
}

impl SortOrder {
    /// Sort `records` in place. Stable: equal timestamps keep insertion order.
    pub fn apply<T: Record>(self, records: &mut [T]) {
        match self {
            Self::Insertion => {}
            Self::NewestFirst => records.sort_by_key(|r| Reverse(r.created_at())),
            Self::OldestFirst => records.sort_by_key(|r| r.created_at()),
        }
    }
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::Insertion),
            "-created_date" | "-created_at" => Ok(Self::NewestFirst),
            "created_date" | "created_at" => Ok(Self::OldestFirst),
            other => Err(StoreError::SortSpec(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-created_date", SortOrder::NewestFirst)]
    #[case("-created_at", SortOrder::NewestFirst)]
    #[case("created_date", SortOrder::OldestFirst)]
    #[case("", SortOrder::Insertion)]
    fn parses_known_specs(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(raw.parse::<SortOrder>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_spec() {
        let err = "-likes_count".parse::<SortOrder>().unwrap_err();
        assert!(matches!(err, StoreError::SortSpec(ref s) if s == "-likes_count"));
    }
}
