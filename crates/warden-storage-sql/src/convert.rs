//! Conversion between database rows and domain models.

use warden_model::{Role, Status, UserIdentity};

use crate::entities::UserIdentityRow;

impl From<UserIdentityRow> for UserIdentity {
    fn from(row: UserIdentityRow) -> Self {
        let role = match row.role.as_str() {
            "admin" => Role::Admin,
            _ => Role::Member,
        };

        let status = match row.status.as_str() {
            "disabled" => Status::Disabled,
            _ => Status::Active,
        };

        Self {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
            password_hash: row.password_hash,
            role,
            status,
            federated_subject: row.federated_subject,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
