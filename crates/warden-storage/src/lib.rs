//! # warden-storage
//!
//! Storage abstraction for Warden identities.
//!
//! This crate defines the narrow [`UserStore`] seam the identity
//! resolver depends on, the storage error taxonomy, and an in-memory
//! implementation used by tests and embedded deployments. The SQL
//! backend lives in `warden-storage-sql`.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod user;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryUserStore;
pub use user::UserStore;
