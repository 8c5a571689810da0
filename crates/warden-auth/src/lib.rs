//! # warden-auth
//!
//! Sign-in orchestration for Warden.
//!
//! This crate ties the other Warden crates together into the two operations
//! callers actually invoke:
//! - [`AuthenticationService::sign_in`] checks a local password and issues a
//!   session token
//! - [`AuthenticationService::google_sign_in`] verifies a Google assertion,
//!   resolves or creates the identity it names, and issues a session token
//!
//! Failures map onto a small, fixed error set ([`AuthError`]) so callers can
//! distinguish "retry later" from "the credentials are wrong" without ever
//! learning more than the taxonomy allows.
//!
//! ## Modules
//!
//! - [`error`] - The sign-in error taxonomy
//! - [`password`] - Argon2id password hashing and verification
//! - [`resolver`] - Identity lookup and first-contact provisioning
//! - [`service`] - The sign-in entry points

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod password;
pub mod resolver;
pub mod service;

// Re-export commonly used types
pub use error::{AuthError, AuthResult};
pub use password::{CredentialHasher, HashingPolicy};
pub use resolver::IdentityResolver;
pub use service::AuthenticationService;
