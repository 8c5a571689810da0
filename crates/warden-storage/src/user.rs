//! User storage trait.

use async_trait::async_trait;
use uuid::Uuid;
use warden_model::UserIdentity;

use crate::error::StorageResult;

/// Storage seam for user identities.
///
/// Implementations must enforce email uniqueness: a save that would
/// give two identities the same email fails with
/// [`StorageError::Duplicate`](crate::StorageError::Duplicate) instead
/// of silently creating a second record. The identity resolver's
/// find-or-create correctness depends on this invariant.
///
/// Email comparison is exact, byte for byte, with no case folding.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up an identity by its exact email.
    ///
    /// ## Errors
    ///
    /// Returns an error if the lookup fails at the storage layer.
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<UserIdentity>>;

    /// Persists an identity, returning its id.
    ///
    /// Re-saving an identity with an id already present updates it in
    /// place; email is immutable once stored.
    ///
    /// ## Errors
    ///
    /// Returns [`StorageError::Duplicate`](crate::StorageError::Duplicate)
    /// if another identity already holds the email, or another error if
    /// persistence fails.
    async fn save(&self, identity: &UserIdentity) -> StorageResult<Uuid>;
}
