//! Key sources: HTTP fetch and TTL caching.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::KeySourceResult;
use crate::jwks::JsonWebKeySet;

/// Where Google publishes the keys its ID tokens are signed with.
pub const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// How long fetched keys are reused before they are fetched again.
///
/// Providers rotate signing keys on the order of days, so an hour keeps a
/// busy process from hammering the JWKS endpoint while still picking up
/// rotations promptly.
pub const DEFAULT_JWKS_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Produces the current signing key set of an identity provider.
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Fetches the provider's current key set.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::KeySourceError`] if the key set cannot be
    /// produced.
    async fn fetch(&self) -> KeySourceResult<JsonWebKeySet>;
}

/// Fetches a key set over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpKeySource {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySource {
    /// Creates a source that fetches from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Creates a source for Google's published signing keys.
    #[must_use]
    pub fn google() -> Self {
        Self::new(GOOGLE_JWKS_URL)
    }
}

#[async_trait]
impl KeySource for HttpKeySource {
    async fn fetch(&self) -> KeySourceResult<JsonWebKeySet> {
        tracing::debug!(url = %self.url, "fetching provider key set");
        let jwks = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(jwks)
    }
}

struct CachedKeys {
    keys: JsonWebKeySet,
    fetched_at: Instant,
}

/// Caches another source's key set for a fixed TTL.
///
/// A failed refresh leaves the expired entry in place, so the next call
/// tries the inner source again.
pub struct CachingKeySource {
    inner: Arc<dyn KeySource>,
    ttl: Duration,
    cached: RwLock<Option<CachedKeys>>,
}

impl CachingKeySource {
    /// Wraps `inner` with the default TTL.
    #[must_use]
    pub fn new(inner: Arc<dyn KeySource>) -> Self {
        Self {
            inner,
            ttl: DEFAULT_JWKS_CACHE_TTL,
            cached: RwLock::new(None),
        }
    }

    /// Sets how long a fetched key set is reused.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl KeySource for CachingKeySource {
    async fn fetch(&self) -> KeySourceResult<JsonWebKeySet> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.keys.clone());
                }
            }
        }

        let keys = self.inner.fetch().await?;
        let mut slot = self.cached.write().await;
        *slot = Some(CachedKeys {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeySourceError;
    use crate::jwks::JsonWebKey;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn one_key_set() -> JsonWebKeySet {
        JsonWebKeySet {
            keys: vec![JsonWebKey {
                kty: "RSA".to_string(),
                key_use: Some("sig".to_string()),
                alg: Some("RS256".to_string()),
                kid: Some("k1".to_string()),
                n: Some("qgaxVYX6".to_string()),
                e: Some("AQAB".to_string()),
            }],
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl KeySource for CountingSource {
        async fn fetch(&self) -> KeySourceResult<JsonWebKeySet> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(one_key_set())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl KeySource for FailingSource {
        async fn fetch(&self) -> KeySourceResult<JsonWebKeySet> {
            Err(KeySourceError::unavailable("no keys today"))
        }
    }

    #[tokio::test]
    async fn fresh_keys_are_served_from_cache() {
        let inner = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let cache = CachingKeySource::new(inner.clone());

        let first = cache.fetch().await.unwrap();
        let second = cache.fetch().await.unwrap();

        assert!(first.find("k1").is_some());
        assert!(second.find("k1").is_some());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_keys_are_refetched() {
        let inner = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let cache = CachingKeySource::new(inner.clone()).with_ttl(Duration::ZERO);

        cache.fetch().await.unwrap();
        cache.fetch().await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fetch_failures_propagate() {
        let cache = CachingKeySource::new(Arc::new(FailingSource));
        let err = cache.fetch().await.unwrap_err();
        assert!(matches!(err, KeySourceError::Unavailable(_)));
    }
}
