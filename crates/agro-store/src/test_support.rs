//! Shared test utilities for agro-store tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::store::AgroStore;

    /// A fresh store seeded from the bundled fixtures.
    pub fn test_store() -> AgroStore {
        AgroStore::bundled().unwrap()
    }
}
