//! # agro-core
//!
//! Core records and enumerations for the agrodash farmer dashboard.
//!
//! This crate provides the foundational types shared across all agrodash crates:
//! - Entity structs for farms, weather insights, crop recommendations,
//!   forum posts and replies, learning resources, and users
//! - Closed enums for every category/type/level field, with ordering where
//!   the domain ranks values (severity, difficulty, water/market levels)
//! - ID prefix constants
//! - Cross-cutting error types
//! - Page view-models returned by controllers and printed by `agro`

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
