//! Per-entity record plumbing: create drafts, `Record` impls, and the
//! entity-specific queries on [`AgroStore`](crate::store::AgroStore).

pub mod crop_recommendation;
pub mod farm;
pub mod forum;
pub mod resource;
pub mod user;
pub mod weather_insight;

pub use crop_recommendation::NewCropRecommendation;
pub use farm::NewFarm;
pub use forum::{NewForumPost, NewForumReply};
pub use resource::NewResource;
pub use user::NewUser;
pub use weather_insight::NewWeatherInsight;
