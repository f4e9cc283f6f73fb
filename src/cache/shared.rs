//! Shared Cache Module
//!
//! The concurrency-safe handle the rest of the backend works against: typed
//! serde accessors, TTL tier helpers, get-or-compute orchestration,
//! best-effort prefetching and pattern-based bulk invalidation, all over a
//! locked [`CacheStore`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::cache::{CacheStats, CacheStore, KeyMatcher, RegexMatcher, COLD_TTL, HOT_TTL, WARM_TTL};
use crate::config::CacheConfig;
use crate::error::CacheError;

// == Shared Cache ==
/// Cloneable handle to a single shared cache instance.
///
/// Construct one at the composition root and pass clones wherever caching is
/// needed; all clones operate on the same store. Reads take the write lock
/// too, because a read bumps recency metadata and the hit/miss counters.
#[derive(Clone)]
pub struct SharedCache {
    store: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    // == Constructors ==
    /// Creates a cache with explicit capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries, default_ttl))),
        }
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.default_ttl)
    }

    // == Get ==
    /// Retrieves and deserializes the value cached under `key`.
    ///
    /// Absent and expired keys report `None`. A cached value that no longer
    /// deserializes as `T` (the stored shape drifted across a deploy) is
    /// dropped and reported absent, so the next get-or-compute repopulates
    /// it instead of failing forever.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut store = self.store.write().await;
        let raw = store.get(key)?;
        match serde_json::from_value(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "cached value under '{}' no longer deserializes, dropping it: {}",
                    key, err
                );
                store.delete(key);
                None
            }
        }
    }

    // == Set ==
    /// Serializes `value` and stores it under `key`.
    ///
    /// With `ttl: None` the configured default TTL applies.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let raw = serde_json::to_value(value).map_err(|source| CacheError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.write().await.set(key.to_string(), raw, ttl);
        Ok(())
    }

    // == TTL Tiers ==
    /// Stores data expected to change frequently, e.g. full task listings.
    pub async fn set_hot<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.set(key, value, Some(HOT_TTL)).await
    }

    /// Stores per-user data that changes at a moderate rate.
    pub async fn set_warm<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.set(key, value, Some(WARM_TTL)).await
    }

    /// Stores expensive-to-recompute, rarely-changing aggregates.
    pub async fn set_cold<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.set(key, value, Some(COLD_TTL)).await
    }

    // == Delete ==
    /// Removes `key`, reporting whether a live entry was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    // == Exists ==
    /// Checks whether a live entry is cached under `key`.
    ///
    /// Counts towards the hit/miss statistics exactly like a read.
    pub async fn exists(&self, key: &str) -> bool {
        self.store.write().await.exists(key)
    }

    // == Clear ==
    /// Drops every entry and zeroes the statistics.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == Cleanup ==
    /// Sweeps out expired entries, returning the number removed.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    // == Stats ==
    /// Returns a snapshot copy of the statistics counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Invalidate Pattern ==
    /// Deletes every key matching the regex `pattern`, returning the count.
    ///
    /// Bulk invalidation is best-effort maintenance: a pattern that fails to
    /// compile invalidates nothing instead of failing the caller. The empty
    /// pattern would match every key, so it is treated as a no-op as well.
    pub async fn invalidate_pattern(&self, pattern: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        let matcher = match RegexMatcher::new(pattern) {
            Ok(matcher) => matcher,
            Err(err) => {
                warn!("skipping bulk invalidation: {}", err);
                return 0;
            }
        };
        self.invalidate_matching(&matcher).await
    }

    // == Invalidate Matching ==
    /// Deletes every key accepted by `matcher`, returning the count.
    pub async fn invalidate_matching(&self, matcher: &dyn KeyMatcher) -> usize {
        self.store.write().await.invalidate_matching(matcher)
    }

    // == Get Or Set ==
    /// Returns the value cached under `key`, computing and storing it on a
    /// miss.
    ///
    /// The factory only runs on a miss and runs outside the lock; its error
    /// propagates to the caller unchanged and nothing is stored in that
    /// case. Concurrent calls for the same cold key are not collapsed: both
    /// may invoke their factory and the second write wins. Callers whose
    /// factories are expensive or non-idempotent under concurrent
    /// invocation add their own de-duplication.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        factory: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get(key).await {
            return Ok(cached);
        }

        let value = factory().await?;

        if let Err(err) = self.set(key, &value, ttl).await {
            // The computed value is still good for the caller; losing the
            // cache write only costs the next call a recompute.
            warn!("could not cache computed value: {}", err);
        }

        Ok(value)
    }

    // == Prefetch ==
    /// Fire-and-forget population of `key`.
    ///
    /// Returns immediately; the lookup and factory run on a spawned task.
    /// If a live entry already exists the factory never runs. A factory
    /// error is logged and swallowed; prefetching is an optimization and
    /// must never surface a failure into the path that triggered it.
    ///
    /// The returned handle can be awaited where completion matters (tests,
    /// shutdown) and dropped everywhere else.
    pub fn prefetch<T, E, F, Fut>(
        &self,
        key: impl Into<String>,
        ttl: Option<Duration>,
        factory: F,
    ) -> JoinHandle<()>
    where
        T: Serialize + Send + Sync + 'static,
        E: std::fmt::Display + Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let cache = self.clone();
        let key = key.into();
        tokio::spawn(async move {
            // Check liveness without touching counters or recency; a
            // prefetch is not a caller-visible read
            if cache.store.read().await.is_live(&key) {
                return;
            }
            match factory().await {
                Ok(value) => {
                    if let Err(err) = cache.set(&key, &value, ttl).await {
                        warn!("could not cache prefetched value: {}", err);
                    }
                }
                Err(err) => {
                    warn!("prefetch for '{}' failed: {}", key, err);
                }
            }
        })
    }
}
