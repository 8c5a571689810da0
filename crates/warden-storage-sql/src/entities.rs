//! Database row entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `user_identities` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserIdentityRow {
    /// Primary key.
    pub id: Uuid,
    /// Unique email, stored exactly as provided.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// PHC-format password hash, NULL for federation-only accounts.
    pub password_hash: Option<String>,
    /// Role as lowercase TEXT.
    pub role: String,
    /// Status as lowercase TEXT.
    pub status: String,
    /// Subject at the external identity provider.
    pub federated_subject: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
