//! Issuer name and token lifetime, validated fail-fast.

use chrono::Duration;

use crate::error::{TokenError, TokenResult};

/// Environment variable holding the token lifetime in hours.
pub const TOKEN_LIFETIME_VAR: &str = "TOKEN_EXP";

/// Environment variable holding the issuer name.
pub const TOKEN_ISSUER_VAR: &str = "TOKEN_ISSUER";

/// Issuer used when [`TOKEN_ISSUER_VAR`] is not set.
pub const DEFAULT_ISSUER: &str = "warden";

/// Validated token issuance configuration.
///
/// Construction is the validation point: a process that cannot produce a
/// positive lifetime must not start, so there is no fallible accessor and no
/// default lifetime to fall back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    issuer: String,
    lifetime: Duration,
}

impl TokenConfig {
    /// Creates a configuration with the given issuer and lifetime in hours.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Configuration`] if `lifetime_hours` is zero or
    /// negative.
    pub fn new(issuer: impl Into<String>, lifetime_hours: i64) -> TokenResult<Self> {
        if lifetime_hours <= 0 {
            return Err(TokenError::configuration(
                "token lifetime must be a positive number of hours",
            ));
        }
        let lifetime = Duration::try_hours(lifetime_hours).ok_or_else(|| {
            TokenError::configuration(format!("token lifetime of {lifetime_hours} hours overflows"))
        })?;
        Ok(Self {
            issuer: issuer.into(),
            lifetime,
        })
    }

    /// Loads the configuration from the environment.
    ///
    /// The lifetime comes from [`TOKEN_LIFETIME_VAR`] and is required. The
    /// issuer comes from [`TOKEN_ISSUER_VAR`] and falls back to
    /// [`DEFAULT_ISSUER`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Configuration`] if the lifetime variable is
    /// unset, not a whole number, or not positive.
    pub fn from_env() -> TokenResult<Self> {
        let raw = std::env::var(TOKEN_LIFETIME_VAR)
            .map_err(|_| TokenError::configuration(format!("{TOKEN_LIFETIME_VAR} is not set")))?;
        let issuer =
            std::env::var(TOKEN_ISSUER_VAR).unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        Self::new(issuer, parse_lifetime_hours(&raw)?)
    }

    /// The issuer written into the `iss` claim.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// The configured token lifetime.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// The configured token lifetime in whole hours.
    #[must_use]
    pub fn lifetime_hours(&self) -> i64 {
        self.lifetime.num_hours()
    }
}

fn parse_lifetime_hours(raw: &str) -> TokenResult<i64> {
    raw.parse().map_err(|_| {
        TokenError::configuration(format!(
            "{TOKEN_LIFETIME_VAR} must be a whole number of hours, got {raw:?}"
        ))
    })
}
