//! Verified assertion contents and the verifier trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::InvalidAssertion;

/// The verified contents of a federated sign-in assertion.
///
/// Only produced by an [`AssertionVerifier`] after the signature and claims
/// have been checked, so holding one of these means the provider vouched for
/// the subject and email it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedAssertion {
    /// Stable subject identifier assigned by the provider.
    pub subject: String,
    /// Email the provider attests for the subject.
    pub email: String,
    /// Human-readable name, when the provider supplied one.
    pub display_name: Option<String>,
    /// Issuer that signed the assertion.
    pub issuer: String,
    /// When the assertion expires.
    pub expires_at: DateTime<Utc>,
}

/// Verifies raw assertions from a federated identity provider.
///
/// Implementations collapse every failure into [`InvalidAssertion`] and must
/// never log or return the raw assertion string; it is a bearer credential
/// until it has been rejected, and still sensitive afterwards.
#[async_trait]
pub trait AssertionVerifier: Send + Sync {
    /// Verifies a raw assertion and extracts its contents.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAssertion`] for any malformed, forged, expired, or
    /// otherwise unacceptable assertion.
    async fn verify(&self, assertion: &str) -> Result<FederatedAssertion, InvalidAssertion>;
}
