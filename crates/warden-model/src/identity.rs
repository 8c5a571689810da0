//! User identity domain model.
//!
//! A `UserIdentity` is the durable record both sign-in paths resolve
//! to. Email is the reconciliation key: federated sign-in finds or
//! creates a record by email, never by federated subject alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::{Role, Status};

/// A durable user identity.
///
/// Created by local registration (outside this core) or by the first
/// federated sign-in for an email. The identity resolver never mutates
/// an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique identifier; becomes the `sub` claim of issued tokens.
    pub id: Uuid,
    /// Email address, unique and compared exactly as stored.
    pub email: String,
    /// Display name, if known.
    pub display_name: Option<String>,
    /// PHC-format password hash. Absent for federation-only accounts.
    pub password_hash: Option<String>,
    /// Authorization role.
    pub role: Role,
    /// Account status.
    pub status: Status,
    /// Subject identifier at the external identity provider.
    pub federated_subject: Option<String>,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
    /// When the identity was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Creates a new identity with member role and active status.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email: email.into(),
            display_name: None,
            password_hash: None,
            role: Role::Member,
            status: Status::Active,
            federated_subject: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the stored password hash.
    #[must_use]
    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the federated subject reference.
    #[must_use]
    pub fn with_federated_subject(mut self, subject: impl Into<String>) -> Self {
        self.federated_subject = Some(subject.into());
        self
    }

    /// Checks whether this account can only sign in via federation.
    #[must_use]
    pub const fn is_federation_only(&self) -> bool {
        self.password_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_identity_has_defaults() {
        let identity = UserIdentity::new("jdoe@example.com");

        assert_eq!(identity.email, "jdoe@example.com");
        assert_eq!(identity.role, Role::Member);
        assert_eq!(identity.status, Status::Active);
        assert!(identity.password_hash.is_none());
        assert!(identity.federated_subject.is_none());
        assert!(identity.is_federation_only());
    }

    #[test]
    fn builder_pattern_works() {
        let identity = UserIdentity::new("jdoe@example.com")
            .with_display_name("J. Doe")
            .with_password_hash("$argon2id$v=19$m=19456,t=2,p=1$abc$def")
            .with_role(Role::Admin)
            .with_status(Status::Disabled)
            .with_federated_subject("109547");

        assert_eq!(identity.display_name, Some("J. Doe".to_string()));
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.status, Status::Disabled);
        assert_eq!(identity.federated_subject, Some("109547".to_string()));
        assert!(!identity.is_federation_only());
    }

    #[test]
    fn ids_are_unique() {
        let a = UserIdentity::new("a@example.com");
        let b = UserIdentity::new("a@example.com");
        assert_ne!(a.id, b.id);
    }
}
