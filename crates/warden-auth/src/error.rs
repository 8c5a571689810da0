//! The sign-in error taxonomy.

use thiserror::Error;
use warden_federation::InvalidAssertion;
use warden_storage::StorageError;
use warden_token::TokenError;

/// Every way a sign-in can fail.
///
/// The set is deliberately small and stable: callers branch on these
/// variants, map them to their own status codes, and decide what to retry.
/// Only [`AuthError::StorageUnavailable`] is worth retrying; the others
/// report a fact about the request that a retry will not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No identity matches the presented email, or the matched identity
    /// cannot sign in with a password.
    #[error("user was not found")]
    UserNotFound,

    /// The password does not match the stored credential.
    #[error("password does not match")]
    CredentialMismatch,

    /// The federated assertion was rejected.
    ///
    /// Deliberately opaque. The verifier logs the reason at debug level and
    /// this variant carries none of it.
    #[error(transparent)]
    AssertionRejected(#[from] InvalidAssertion),

    /// The user store could not serve the request.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// The identity resolved but a session token could not be produced.
    #[error("token issuance failed: {0}")]
    IssuanceFailed(#[from] TokenError),

    /// An internal fault outside the other categories.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns `true` if the same request may succeed on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

/// Result type for sign-in operations.
pub type AuthResult<T> = Result<T, AuthError>;
