//! ID prefixes for every collection.
//!
//! Generated IDs have the shape `{prefix}-{8 hex chars}`, e.g. `pst-a3f8b2c1`.

use crate::enums::EntityType;

pub const PREFIX_FARM: &str = "frm";
pub const PREFIX_WEATHER_INSIGHT: &str = "wxi";
pub const PREFIX_CROP_RECOMMENDATION: &str = "rec";
pub const PREFIX_RESOURCE: &str = "res";
pub const PREFIX_FORUM_POST: &str = "pst";
pub const PREFIX_FORUM_REPLY: &str = "rpl";
pub const PREFIX_USER: &str = "usr";

/// Prefix used when generating IDs for the given collection.
#[must_use]
pub const fn prefix_for(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Farm => PREFIX_FARM,
        EntityType::WeatherInsight => PREFIX_WEATHER_INSIGHT,
        EntityType::CropRecommendation => PREFIX_CROP_RECOMMENDATION,
        EntityType::Resource => PREFIX_RESOURCE,
        EntityType::ForumPost => PREFIX_FORUM_POST,
        EntityType::ForumReply => PREFIX_FORUM_REPLY,
        EntityType::User => PREFIX_USER,
    }
}

/// Format a prefixed ID from raw random bytes.
#[must_use]
pub fn format_id(prefix: &str, bytes: [u8; 4]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
