//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use warden_model::UserIdentity;

use crate::error::{StorageError, StorageResult};
use crate::user::UserStore;

/// In-memory [`UserStore`] keyed by exact email.
///
/// Enforces the same email-uniqueness invariant as the SQL store: a
/// save racing another identity onto an existing email fails with
/// [`StorageError::Duplicate`]. The check-and-insert runs under a
/// single write lock, so concurrent saves cannot both win. Re-saving
/// an id that is already stored updates the record in place and keeps
/// its stored email.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserIdentity>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored identities.
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<UserIdentity>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save(&self, identity: &UserIdentity) -> StorageResult<Uuid> {
        let mut users = self.users.write().await;

        // An identity that is already stored updates in place and keeps
        // its stored email. The SQL store's upsert likewise never
        // rewrites the email column.
        let stored_email = users
            .values()
            .find(|existing| existing.id == identity.id)
            .map(|existing| existing.email.clone());
        if let Some(email) = stored_email {
            let mut updated = identity.clone();
            updated.email = email.clone();
            users.insert(email, updated);
            return Ok(identity.id);
        }

        if users.contains_key(&identity.email) {
            return Err(StorageError::duplicate("email", &identity.email));
        }

        users.insert(identity.email.clone(), identity.clone());
        Ok(identity.id)
    }
}
