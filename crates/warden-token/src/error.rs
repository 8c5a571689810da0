//! Token error types.

use thiserror::Error;

/// Errors raised while configuring, signing, or validating session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token configuration is missing or invalid.
    ///
    /// Raised at startup, before any token is issued.
    #[error("token configuration error: {0}")]
    Configuration(String),

    /// The signing key material could not be loaded.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// Signing the claim set failed.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// The token failed signature or claim validation.
    #[error("token validation failed: {0}")]
    Verification(String),
}

impl TokenError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns `true` if the error is a startup configuration problem.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = TokenError::configuration("TOKEN_EXP is not set");
        assert_eq!(
            err.to_string(),
            "token configuration error: TOKEN_EXP is not set"
        );
    }

    #[test]
    fn is_configuration_matches_only_configuration() {
        assert!(TokenError::configuration("x").is_configuration());
        assert!(!TokenError::Signing("x".into()).is_configuration());
    }
}
