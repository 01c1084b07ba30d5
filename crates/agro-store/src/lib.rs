//! # agro-store
//!
//! In-memory data access layer for agrodash.
//!
//! One `AgroStore` owns a collection per entity, seeded from JSON fixtures.
//! All operations are async and hand out copies; canonical records change
//! only through `create`, `update`, and `increment`.

pub mod collection;
pub mod error;
pub mod fixtures;
pub mod record;
pub mod repos;
pub mod sort;
pub mod store;
pub mod updates;

mod test_support;

pub use error::StoreError;
pub use fixtures::Seed;
pub use record::Record;
pub use sort::SortOrder;
pub use store::AgroStore;
