//! The sign-in entry points.

use std::sync::Arc;

use warden_federation::AssertionVerifier;
use warden_storage::UserStore;
use warden_token::{IssuedToken, TokenIssuer};

use crate::error::{AuthError, AuthResult};
use crate::password::CredentialHasher;
use crate::resolver::IdentityResolver;

/// Orchestrates the two sign-in flows end to end.
///
/// Both flows finish the same way: once an identity is resolved and its
/// credential or assertion checks out, the issuer signs a session token for
/// it. Status never gates issuance here; a disabled identity receives a
/// token whose `status` claim says so, and the caller decides what that
/// means.
pub struct AuthenticationService {
    resolver: IdentityResolver,
    hasher: CredentialHasher,
    verifier: Arc<dyn AssertionVerifier>,
    issuer: TokenIssuer,
}

impl AuthenticationService {
    /// Creates a service with the default hashing policy.
    #[must_use]
    pub fn new(
        store: Arc<dyn UserStore>,
        verifier: Arc<dyn AssertionVerifier>,
        issuer: TokenIssuer,
    ) -> Self {
        Self {
            resolver: IdentityResolver::new(store),
            hasher: CredentialHasher::default(),
            verifier,
            issuer,
        }
    }

    /// Replaces the credential hasher.
    #[must_use]
    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Signs in with a local email and password.
    ///
    /// An identity that has no local password, one provisioned through
    /// federated sign-in, is reported as [`AuthError::UserNotFound`], the
    /// same answer an unknown email gets. Probing cannot tell the two
    /// apart.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`], [`AuthError::CredentialMismatch`],
    /// [`AuthError::StorageUnavailable`], or [`AuthError::IssuanceFailed`].
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<IssuedToken> {
        let identity = self.resolver.resolve_local(email).await?;

        let stored = match identity.password_hash.as_deref() {
            Some(hash) if !hash.is_empty() => hash,
            _ => return Err(AuthError::UserNotFound),
        };
        self.hasher.verify(password, stored)?;

        let token = self.issuer.issue(&identity)?;
        tracing::debug!(identity_id = %identity.id, "local sign-in succeeded");
        Ok(token)
    }

    /// Signs in with a raw Google assertion.
    ///
    /// The assertion is verified first; nothing is read or written until the
    /// provider's signature checks out. First contact creates the identity,
    /// every later contact reuses it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AssertionRejected`],
    /// [`AuthError::StorageUnavailable`], or [`AuthError::IssuanceFailed`].
    pub async fn google_sign_in(&self, assertion: &str) -> AuthResult<IssuedToken> {
        let verified = self.verifier.verify(assertion).await?;
        let identity = self.resolver.resolve_federated(&verified).await?;

        let token = self.issuer.issue(&identity)?;
        tracing::debug!(identity_id = %identity.id, "federated sign-in succeeded");
        Ok(token)
    }
}
