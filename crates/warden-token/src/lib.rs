//! # warden-token
//!
//! Session token issuance and validation for Warden.
//!
//! A successful sign-in ends with a signed JWT describing the resolved
//! identity. This crate owns that final step:
//! - [`SessionClaims`] carries the subject, email, role, and status of the
//!   identity plus the standard `iss`/`iat`/`exp` claims
//! - [`TokenConfig`] reads and validates the token lifetime at startup so a
//!   misconfigured process refuses to boot instead of minting bad tokens
//! - [`SigningKey`] wraps the signing material and never prints it
//! - [`TokenIssuer`] signs and (for callers that need it) decodes tokens
//!
//! ## Modules
//!
//! - [`claims`] - JWT claim set embedded in issued tokens
//! - [`config`] - Issuer name and token lifetime, validated fail-fast
//! - [`error`] - Token error types
//! - [`key`] - Signing key material with a redacted `Debug` form
//! - [`issuer`] - Token issuance and validation

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claims;
pub mod config;
pub mod error;
pub mod issuer;
pub mod key;

// Re-export commonly used types
pub use claims::SessionClaims;
pub use config::{TokenConfig, DEFAULT_ISSUER, TOKEN_ISSUER_VAR, TOKEN_LIFETIME_VAR};
pub use error::{TokenError, TokenResult};
pub use issuer::{IssuedToken, TokenIssuer};
pub use key::SigningKey;
