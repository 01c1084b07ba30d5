//! Entity structs for all agrodash records.
//!
//! Each entity maps to one fixture document (an array of records) and one
//! collection in the store. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation. Records carry no
//! behavior beyond small read-only accessors.

mod crop_recommendation;
mod farm;
mod forum;
mod resource;
mod user;
mod weather_insight;

pub use crop_recommendation::{CropRecommendation, MAX_RESILIENCE_SCORE};
pub use farm::Farm;
pub use forum::{ForumPost, ForumReply};
pub use resource::Resource;
pub use user::User;
pub use weather_insight::WeatherInsight;
