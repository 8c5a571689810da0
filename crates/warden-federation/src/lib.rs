//! # warden-federation
//!
//! Federated sign-in for Warden.
//!
//! An external identity provider hands the caller a signed assertion (a
//! Google ID token). This crate turns that opaque string into a verified
//! [`FederatedAssertion`] or a single, deliberately unspecific
//! [`InvalidAssertion`] error. Callers never learn which check failed;
//! the reason is logged at debug level and goes no further.
//!
//! ## Modules
//!
//! - [`assertion`] - Verified assertion contents and the verifier trait
//! - [`error`] - Rejection and key source error types
//! - [`google`] - Google ID token verifier
//! - [`jwks`] - JSON Web Key Set types for provider signing keys
//! - [`keys`] - Key sources: HTTP fetch and TTL caching

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod assertion;
pub mod error;
pub mod google;
pub mod jwks;
pub mod keys;

// Re-export commonly used types
pub use assertion::{AssertionVerifier, FederatedAssertion};
pub use error::{InvalidAssertion, KeySourceError, KeySourceResult};
pub use google::{GoogleVerifier, GOOGLE_ISSUERS};
pub use jwks::{JsonWebKey, JsonWebKeySet};
pub use keys::{
    CachingKeySource, HttpKeySource, KeySource, DEFAULT_JWKS_CACHE_TTL, GOOGLE_JWKS_URL,
};
