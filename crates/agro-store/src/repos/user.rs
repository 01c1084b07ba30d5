//! User records and the current-user stand-in.

use agro_core::entities::User;
use agro_core::enums::EntityType;
use chrono::{DateTime, Utc};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::record::Record;
use crate::sort::SortOrder;
use crate::store::AgroStore;
use crate::updates::user::UserUpdate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub role: String,
}

impl Record for User {
    const ENTITY: EntityType = EntityType::User;
    type Draft = NewUser;
    type Update = UserUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: NewUser) -> Self {
        Self {
            id,
            email: draft.email,
            full_name: draft.full_name,
            phone: draft.phone,
            bio: draft.bio,
            role: draft.role,
            created_at: now,
        }
    }

    fn apply_update(&mut self, update: UserUpdate, _now: DateTime<Utc>) -> Result<(), String> {
        if let Some(v) = update.full_name {
            self.full_name = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.bio {
            self.bio = v;
        }
        Ok(())
    }

    fn collection(store: &AgroStore) -> &Collection<Self> {
        store.users()
    }
}

impl AgroStore {
    /// The signed-in user. Without authentication, the first user record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there are no users.
    pub async fn current_user(&self) -> Result<User, StoreError> {
        self.users()
            .list(SortOrder::Insertion, Some(1))
            .await
            .pop()
            .ok_or_else(|| StoreError::NotFound {
                entity: EntityType::User,
                id: "me".to_string(),
            })
    }

    /// Merge `update` into the current user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there are no users.
    pub async fn update_current_user(&self, update: UserUpdate) -> Result<User, StoreError> {
        let me = self.current_user().await?;
        self.update(&me.id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_store;
    use crate::updates::user::UserUpdateBuilder;

    #[tokio::test]
    async fn current_user_is_first_record() {
        let store = test_store();
        let me = store.current_user().await.unwrap();
        assert_eq!(me.id, "usr-1f2e3d4c");
    }

    #[tokio::test]
    async fn current_user_missing_in_empty_store() {
        let store = AgroStore::empty();
        assert!(store.current_user().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_current_user_clears_bio() {
        let store = test_store();
        let update = UserUpdateBuilder::new()
            .full_name("Adebayo O.")
            .bio(None)
            .build();
        let me = store.update_current_user(update).await.unwrap();
        assert_eq!(me.full_name, "Adebayo O.");
        assert!(me.bio.is_none());
        assert_eq!(me.email, store.current_user().await.unwrap().email);
    }
}
