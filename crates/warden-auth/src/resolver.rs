//! Identity lookup and first-contact provisioning.

use std::sync::Arc;

use warden_federation::FederatedAssertion;
use warden_model::UserIdentity;
use warden_storage::UserStore;

use crate::error::{AuthError, AuthResult};

/// Resolves sign-in attempts to stored identities.
///
/// Email is the reconciliation key for both flows. Local resolution only
/// ever reads; federated resolution creates an identity on first contact and
/// after that returns whatever is stored, byte for byte. A repeat federated
/// sign-in never rewrites the name, role, or status an operator may have
/// changed since.
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
}

impl IdentityResolver {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Looks up the identity for a local password sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`] if no identity has this email,
    /// or [`AuthError::StorageUnavailable`] if the store cannot answer.
    pub async fn resolve_local(&self, email: &str) -> AuthResult<UserIdentity> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Resolves a verified federated assertion to an identity, creating one
    /// on first contact.
    ///
    /// A new identity starts as an active member with no password; it can
    /// only sign in through its provider until a credential is set some
    /// other way.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`] if the store cannot answer
    /// or another request won the create race for this email.
    pub async fn resolve_federated(
        &self,
        assertion: &FederatedAssertion,
    ) -> AuthResult<UserIdentity> {
        if let Some(existing) = self.store.find_by_email(&assertion.email).await? {
            return Ok(existing);
        }

        let mut identity = UserIdentity::new(assertion.email.clone())
            .with_federated_subject(assertion.subject.clone());
        if let Some(name) = &assertion.display_name {
            identity = identity.with_display_name(name.clone());
        }

        self.store.save(&identity).await?;
        tracing::info!(identity_id = %identity.id, "created identity on first federated sign-in");
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;
    use warden_model::{Role, Status};
    use warden_storage::{MemoryUserStore, StorageError, StorageResult};

    fn assertion() -> FederatedAssertion {
        FederatedAssertion {
            subject: "google-subject-1".to_string(),
            email: "alice@example.com".to_string(),
            display_name: Some("Alice Example".to_string()),
            issuer: "https://accounts.google.com".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn local_resolution_finds_stored_identities() {
        let store = Arc::new(MemoryUserStore::new());
        let identity = UserIdentity::new("bob@example.com");
        store.save(&identity).await.unwrap();

        let resolver = IdentityResolver::new(store);
        let found = resolver.resolve_local("bob@example.com").await.unwrap();
        assert_eq!(found.id, identity.id);
    }

    #[tokio::test]
    async fn local_resolution_misses_are_user_not_found() {
        let resolver = IdentityResolver::new(Arc::new(MemoryUserStore::new()));
        let err = resolver.resolve_local("nobody@example.com").await.unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    #[tokio::test]
    async fn local_resolution_is_case_sensitive() {
        let store = Arc::new(MemoryUserStore::new());
        store.save(&UserIdentity::new("bob@example.com")).await.unwrap();

        let resolver = IdentityResolver::new(store);
        let err = resolver.resolve_local("Bob@example.com").await.unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    #[tokio::test]
    async fn first_federated_contact_creates_an_active_member() {
        let store = Arc::new(MemoryUserStore::new());
        let resolver = IdentityResolver::new(store.clone());

        let identity = resolver.resolve_federated(&assertion()).await.unwrap();

        assert_eq!(identity.email, "alice@example.com");
        assert_eq!(identity.display_name.as_deref(), Some("Alice Example"));
        assert_eq!(identity.federated_subject.as_deref(), Some("google-subject-1"));
        assert_eq!(identity.role, Role::Member);
        assert_eq!(identity.status, Status::Active);
        assert_eq!(identity.password_hash, None);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn repeat_federated_contact_returns_the_stored_identity_unchanged() {
        let store = Arc::new(MemoryUserStore::new());
        let seeded = UserIdentity::new("alice@example.com")
            .with_display_name("Alice Renamed")
            .with_role(Role::Admin);
        store.save(&seeded).await.unwrap();

        let resolver = IdentityResolver::new(store.clone());
        let resolved = resolver.resolve_federated(&assertion()).await.unwrap();

        assert_eq!(resolved.id, seeded.id);
        assert_eq!(resolved.display_name.as_deref(), Some("Alice Renamed"));
        assert_eq!(resolved.role, Role::Admin);
        assert_eq!(resolved.federated_subject, None);
        assert_eq!(store.count().await, 1);
    }

    struct FailingStore;

    #[async_trait]
    impl UserStore for FailingStore {
        async fn find_by_email(&self, _email: &str) -> StorageResult<Option<UserIdentity>> {
            Err(StorageError::connection("pool closed"))
        }

        async fn save(&self, _identity: &UserIdentity) -> StorageResult<Uuid> {
            Err(StorageError::connection("pool closed"))
        }
    }

    #[tokio::test]
    async fn store_failures_surface_as_storage_unavailable() {
        let resolver = IdentityResolver::new(Arc::new(FailingStore));

        let local = resolver.resolve_local("alice@example.com").await.unwrap_err();
        assert!(local.is_retryable());

        let federated = resolver.resolve_federated(&assertion()).await.unwrap_err();
        assert!(federated.is_retryable());
    }
}
