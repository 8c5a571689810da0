//! # warden-storage-sql
//!
//! `PostgreSQL` storage for Warden identities, built on `SQLx`.
//!
//! Provides [`PgUserStore`], the SQL implementation of the
//! `warden-storage` [`UserStore`](warden_storage::UserStore) trait,
//! along with pool management. The schema lives in `migrations/`; the
//! `user_identities` table carries a unique constraint on `email`,
//! which is what makes concurrent first-federated-sign-in races safe.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod entities;
pub mod pool;
pub mod user;

mod convert;
mod error;

pub use pool::{create_pool, PoolConfig};
pub use user::PgUserStore;
