//! Rejection and key source error types.

use thiserror::Error;

/// The single error a failed assertion verification produces.
///
/// Every failure mode, a bad signature, an expired token, a foreign
/// audience, an unreachable key source, collapses into this one value.
/// The specific reason is logged at debug level inside the verifier and is
/// never exposed to callers, so error handling cannot become an oracle for
/// probing which check an assertion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid assertion")]
pub struct InvalidAssertion;

/// Errors raised while fetching provider signing keys.
///
/// Key source failures stay internal to the verifier. By the time a caller
/// sees anything, they have already collapsed into [`InvalidAssertion`].
#[derive(Debug, Error)]
pub enum KeySourceError {
    /// The HTTP request for the key set failed.
    #[error("key fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The key source could not produce a key set.
    #[error("key source unavailable: {0}")]
    Unavailable(String),
}

impl KeySourceError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Result type for key source operations.
pub type KeySourceResult<T> = Result<T, KeySourceError>;
