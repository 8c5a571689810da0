//! Token issuance and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Header, Validation};
use warden_model::UserIdentity;

use crate::claims::SessionClaims;
use crate::config::TokenConfig;
use crate::error::{TokenError, TokenResult};
use crate::key::SigningKey;

/// A freshly signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The encoded, signed JWT.
    pub token: String,
    /// When the token expires. Matches the `exp` claim exactly.
    pub expires_at: DateTime<Utc>,
}

/// Signs session tokens for resolved identities.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
    key: SigningKey,
}

impl TokenIssuer {
    /// Creates an issuer from a validated configuration and key.
    #[must_use]
    pub const fn new(config: TokenConfig, key: SigningKey) -> Self {
        Self { config, key }
    }

    /// The configuration this issuer signs under.
    #[must_use]
    pub const fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Signs a session token for `identity`.
    ///
    /// The claim set snapshots the identity as it is now. Status is carried
    /// verbatim, so a disabled identity still receives a token and the caller
    /// decides what a `disabled` claim means.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the claim set cannot be signed.
    pub fn issue(&self, identity: &UserIdentity) -> TokenResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.config.lifetime())
            .ok_or_else(|| {
                TokenError::configuration("token lifetime overflows the expiry timestamp")
            })?;
        let claims = SessionClaims::for_identity(identity, self.config.issuer(), now, expires_at);

        let token = encode(
            &Header::new(self.key.algorithm()),
            &claims,
            self.key.encoding_key(),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))?;

        tracing::debug!(identity_id = %identity.id, "issued session token");

        // The claim holds whole seconds. Report the same instant the token
        // itself carries, not the sub-second original.
        let expires_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(expires_at);
        Ok(IssuedToken { token, expires_at })
    }

    /// Decodes and validates a token this issuer signed.
    ///
    /// Checks the signature, the `exp` claim, and the `iss` claim.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Verification`] if the token is malformed,
    /// expired, signed with a different key, or carries a foreign issuer.
    pub fn decode(&self, token: &str) -> TokenResult<SessionClaims> {
        let mut validation = Validation::new(self.key.algorithm());
        validation.set_issuer(&[self.config.issuer()]);
        validation.validate_exp = true;

        decode::<SessionClaims>(token, self.key.decoding_key(), &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Verification(e.to_string()))
    }
}
