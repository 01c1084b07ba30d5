//! Seed data: the bundled fixture documents and loading from a directory.
//!
//! Each collection is one JSON document holding an array of records. Any
//! record that fails to parse (unknown enum value, missing field) or fails
//! its integrity check is a data defect and aborts seeding.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use agro_core::entities::{
    CropRecommendation, Farm, ForumPost, ForumReply, Resource, User, WeatherInsight,
};
use agro_core::enums::EntityType;

use crate::error::StoreError;
use crate::record::Record;

const FARMS: &str = include_str!("../fixtures/farms.json");
const WEATHER_INSIGHTS: &str = include_str!("../fixtures/weather_insights.json");
const CROP_RECOMMENDATIONS: &str = include_str!("../fixtures/crop_recommendations.json");
const RESOURCES: &str = include_str!("../fixtures/resources.json");
const FORUM_POSTS: &str = include_str!("../fixtures/forum_posts.json");
const FORUM_REPLIES: &str = include_str!("../fixtures/forum_replies.json");
const USERS: &str = include_str!("../fixtures/users.json");

/// File name of the fixture document for a collection.
#[must_use]
pub const fn fixture_file(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Farm => "farms.json",
        EntityType::WeatherInsight => "weather_insights.json",
        EntityType::CropRecommendation => "crop_recommendations.json",
        EntityType::Resource => "resources.json",
        EntityType::ForumPost => "forum_posts.json",
        EntityType::ForumReply => "forum_replies.json",
        EntityType::User => "users.json",
    }
}

/// Initial contents of every collection.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub farms: Vec<Farm>,
    pub weather_insights: Vec<WeatherInsight>,
    pub crop_recommendations: Vec<CropRecommendation>,
    pub resources: Vec<Resource>,
    pub forum_posts: Vec<ForumPost>,
    pub forum_replies: Vec<ForumReply>,
    pub users: Vec<User>,
}

impl Seed {
    /// Parse the fixtures compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if a document is malformed.
    pub fn bundled() -> Result<Self, StoreError> {
        Ok(Self {
            farms: parse_document(FARMS)?,
            weather_insights: parse_document(WEATHER_INSIGHTS)?,
            crop_recommendations: parse_document(CROP_RECOMMENDATIONS)?,
            resources: parse_document(RESOURCES)?,
            forum_posts: parse_document(FORUM_POSTS)?,
            forum_replies: parse_document(FORUM_REPLIES)?,
            users: parse_document(USERS)?,
        })
    }

    /// Read `<collection>.json` files from `dir`. A missing file yields an
    /// empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if a file exists but cannot be read or
    /// parsed.
    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            farms: read_document(dir)?,
            weather_insights: read_document(dir)?,
            crop_recommendations: read_document(dir)?,
            resources: read_document(dir)?,
            forum_posts: read_document(dir)?,
            forum_replies: read_document(dir)?,
            users: read_document(dir)?,
        })
    }
}

fn read_document<T: Record>(dir: &Path) -> Result<Vec<T>, StoreError> {
    let path = dir.join(fixture_file(T::ENTITY));
    match std::fs::read_to_string(&path) {
        Ok(raw) => parse_document(&raw),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "fixture missing, collection starts empty");
            Ok(Vec::new())
        }
        Err(e) => Err(StoreError::Fixture {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Parse one fixture document and run integrity checks on every record.
///
/// # Errors
///
/// Returns `StoreError::Fixture` naming the document and the defect.
pub fn parse_document<T: Record>(raw: &str) -> Result<Vec<T>, StoreError> {
    let source_name = fixture_file(T::ENTITY);
    let fixture_error = |reason: String| StoreError::Fixture {
        source_name: source_name.to_string(),
        reason,
    };

    let records: Vec<T> = serde_json::from_str(raw).map_err(|e| fixture_error(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(fixture_error(format!("duplicate id {}", record.id())));
        }
        record
            .check()
            .map_err(|reason| fixture_error(format!("{}: {reason}", record.id())))?;
    }
    Ok(records)
}
