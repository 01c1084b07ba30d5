//! Filter sentinel shared by every pipeline.

use agro_core::enums::parse_enum;
use agro_core::errors::CoreError;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

/// Raw value meaning "no filter on this axis".
pub const ALL: &str = "all";

/// One filter axis: either unconstrained or pinned to a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` passes this axis.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: DeserializeOwned> Choice<T> {
    /// Parse a closed-enum axis; `"all"` is the sentinel.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` if `raw` is neither `"all"` nor a
    /// variant of `T`.
    pub fn parse(raw: &str, field: &str) -> Result<Self, CoreError> {
        if raw.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        parse_enum(raw, field).map(Self::Only)
    }
}

impl Choice<String> {
    /// Free-text axis (for example a state name); only the exact `"all"` is
    /// the sentinel.
    #[must_use]
    pub fn text(raw: &str) -> Self {
        if raw == ALL {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }
}

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}
