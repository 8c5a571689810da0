//! JWT claim set embedded in issued session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use warden_model::{Role, Status, UserIdentity};

/// Claims carried by a session token.
///
/// The subject is the identity id, not the email. Role and status are
/// snapshots taken at issuance time; a token minted for an identity that is
/// later disabled stays valid until it expires, and callers that enforce
/// status do so from the `status` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the identity id as a string.
    pub sub: String,
    /// Email of the identity at issuance time.
    pub email: String,
    /// Role of the identity at issuance time.
    pub role: Role,
    /// Status of the identity at issuance time.
    pub status: Status,
    /// Issuer of the token.
    pub iss: String,
    /// Issued-at time (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Builds the claim set for an identity.
    #[must_use]
    pub fn for_identity(
        identity: &UserIdentity,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            role: identity.role,
            status: identity.status,
            iss: issuer.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns `true` if the token is expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn identity() -> UserIdentity {
        UserIdentity::new("alice@example.com")
            .with_role(Role::Admin)
            .with_status(Status::Disabled)
    }

    #[test]
    fn claims_snapshot_the_identity() {
        let identity = identity();
        let now = Utc::now();
        let claims = SessionClaims::for_identity(&identity, "warden", now, now + Duration::hours(2));

        assert_eq!(claims.sub, identity.id.to_string());
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.status, Status::Disabled);
        assert_eq!(claims.iss, "warden");
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
    }

    #[test]
    fn expiry_check_uses_the_exp_claim() {
        let identity = identity();
        let now = Utc::now();
        let claims = SessionClaims::for_identity(&identity, "warden", now, now + Duration::hours(1));

        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + Duration::hours(2)));
    }

    #[test]
    fn claims_serialize_with_lowercase_enums() {
        let identity = identity();
        let now = Utc::now();
        let claims = SessionClaims::for_identity(&identity, "warden", now, now + Duration::hours(1));

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["status"], "disabled");
        assert_eq!(json["iss"], "warden");
    }
}
