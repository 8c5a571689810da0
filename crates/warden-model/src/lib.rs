//! # warden-model
//!
//! Domain models for Warden (`UserIdentity`, `Role`, `Status`).
//!
//! This crate defines the durable identity entity that both sign-in
//! paths resolve to, plus the role/status enumerations embedded in
//! issued tokens.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod identity;
pub mod role;

pub use identity::UserIdentity;
pub use role::{Role, Status};
