//! JSON Web Key Set types for provider signing keys.
//!
//! A consuming subset of [RFC 7517](https://tools.ietf.org/html/rfc7517):
//! enough to parse the key sets identity providers publish and pick out the
//! RSA key an assertion header points at.

use serde::{Deserialize, Serialize};

/// A set of provider signing keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    /// The keys in the set.
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    /// Creates an empty key set.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Finds a key by its ID.
    #[must_use]
    pub fn find(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|k| k.kid.as_deref() == Some(kid))
    }
}

/// A single provider signing key.
///
/// Parsed leniently: unknown key types and missing parameters deserialize
/// fine and are skipped at lookup time, so one exotic key in a provider's
/// set cannot poison the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWebKey {
    /// Key type (e.g. "RSA").
    pub kty: String,

    /// Public key use ("sig" for signature keys).
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,

    /// Algorithm intended for use with the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    /// Key ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// RSA modulus (base64url encoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// RSA exponent (base64url encoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

impl JsonWebKey {
    /// Checks if this is an RSA key.
    #[must_use]
    pub fn is_rsa(&self) -> bool {
        self.kty == "RSA"
    }

    /// Returns the RSA modulus and exponent when both are present.
    #[must_use]
    pub fn rsa_components(&self) -> Option<(&str, &str)> {
        match (self.is_rsa(), self.n.as_deref(), self.e.as_deref()) {
            (true, Some(n), Some(e)) => Some((n, e)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE_STYLE_JWKS: &str = r#"{
        "keys": [
            {
                "kty": "RSA",
                "use": "sig",
                "alg": "RS256",
                "kid": "abc123",
                "n": "qgaxVYX6",
                "e": "AQAB"
            },
            {
                "kty": "RSA",
                "use": "sig",
                "alg": "RS256",
                "kid": "def456",
                "n": "s9xLTxsb",
                "e": "AQAB"
            }
        ]
    }"#;

    #[test]
    fn parses_a_provider_key_set() {
        let jwks: JsonWebKeySet = serde_json::from_str(GOOGLE_STYLE_JWKS).unwrap();
        assert_eq!(jwks.keys.len(), 2);

        let key = jwks.find("abc123").unwrap();
        assert!(key.is_rsa());
        assert_eq!(key.rsa_components(), Some(("qgaxVYX6", "AQAB")));
    }

    #[test]
    fn unknown_kid_finds_nothing() {
        let jwks: JsonWebKeySet = serde_json::from_str(GOOGLE_STYLE_JWKS).unwrap();
        assert!(jwks.find("nope").is_none());
    }

    #[test]
    fn non_rsa_keys_yield_no_components() {
        let key: JsonWebKey = serde_json::from_str(
            r#"{"kty": "EC", "kid": "ec1", "n": "x", "e": "y"}"#,
        )
        .unwrap();
        assert!(!key.is_rsa());
        assert!(key.rsa_components().is_none());
    }
}
