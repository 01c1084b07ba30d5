//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged into the stored record; nullable fields use
//! `Option<Option<T>>` so callers can clear them. List fields replace the
//! stored list wholesale.

pub mod crop_recommendation;
pub mod farm;
pub mod forum;
pub mod resource;
pub mod user;
pub mod weather_insight;
