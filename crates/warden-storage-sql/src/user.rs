//! `PostgreSQL` implementation of the user store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use warden_model::UserIdentity;
use warden_storage::{StorageResult, UserStore};

use crate::entities::UserIdentityRow;
use crate::error::from_sqlx_error;

/// `PostgreSQL` user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a new `PostgreSQL` user store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<UserIdentity>> {
        let row: Option<UserIdentityRow> = sqlx::query_as(
            r"SELECT id, email, display_name, password_hash, role, status,
                federated_subject, created_at, updated_at
            FROM user_identities WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        Ok(row.map(UserIdentity::from))
    }

    async fn save(&self, identity: &UserIdentity) -> StorageResult<Uuid> {
        // Email is deliberately absent from the update set: it is the
        // reconciliation key and immutable once stored. A conflicting
        // email raises 23505 on the unique index.
        sqlx::query(
            r"INSERT INTO user_identities (
                id, email, display_name, password_hash, role, status,
                federated_subject, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                password_hash = EXCLUDED.password_hash,
                role = EXCLUDED.role,
                status = EXCLUDED.status,
                federated_subject = EXCLUDED.federated_subject,
                updated_at = EXCLUDED.updated_at",
        )
        .bind(identity.id)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.password_hash)
        .bind(identity.role.as_str())
        .bind(identity.status.as_str())
        .bind(&identity.federated_subject)
        .bind(identity.created_at)
        .bind(identity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        tracing::debug!(identity_id = %identity.id, "saved user identity");
        Ok(identity.id)
    }
}
