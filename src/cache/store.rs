//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with scan-based LRU eviction
//! and lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::eviction;
use crate::cache::{CacheEntry, CacheStats, KeyMatcher};

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
///
/// The store is synchronous and single-owner; [`SharedCache`] wraps it in a
/// lock for concurrent use.
///
/// [`SharedCache`]: crate::cache::SharedCache
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied to entries stored without an explicit TTL
    default_ttl: Duration,
    /// Source of access stamps; strictly increasing per store
    clock: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// A capacity of zero is raised to one so inserting can always succeed
    /// after evicting a single victim.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries stored without an explicit TTL
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
            max_entries: max_entries.max(1),
            default_ttl,
            clock: 0,
        }
    }

    // == Access Stamps ==
    /// Returns the next access stamp.
    ///
    /// Stamps replace wall-clock time for recency ordering: two reads in the
    /// same millisecond still get distinct, ordered stamps.
    fn next_stamp(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten and the TTL
    /// restarts; access metadata stays as it was, since a write is not a
    /// read. Overwrites never trigger eviction. If the key is new and the
    /// cache is at capacity, exactly one least-recently-used entry is
    /// evicted first.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: Value, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);

        // Overwrite case: membership does not change, nothing to evict
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.reset(value, ttl);
            return;
        }

        // New key at capacity: make room for the insert
        if self.entries.len() >= self.max_entries {
            if let Some(victim) = eviction::select_victim(&self.entries) {
                self.entries.remove(&victim);
                self.stats.evictions += 1;
            }
        }

        let stamp = self.next_stamp();
        self.entries.insert(key, CacheEntry::new(value, ttl, stamp));
        self.stats.size = self.entries.len();
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired; a hit bumps the entry's
    /// access metadata. An expired entry is removed as a side effect and
    /// counted as a miss, same as an absent key.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.misses += 1;
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.size = self.entries.len();
            self.stats.misses += 1;
            return None;
        }

        let stamp = self.next_stamp();
        let entry = self.entries.get_mut(key)?;
        entry.touch(stamp);
        self.stats.hits += 1;
        Some(entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true only if a live entry was removed. An expired entry is
    /// logically already gone, so deleting it reports false even though the
    /// slot is freed.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.stats.size = self.entries.len();
                !entry.is_expired()
            }
            None => false,
        }
    }

    // == Exists ==
    /// Checks whether a live entry is cached under `key`.
    ///
    /// Equivalent to a successful `get` without returning the value: the
    /// same lazy-expiry purge applies and the same hit/miss and recency
    /// accounting is performed.
    pub fn exists(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Is Live ==
    /// Side-effect-free check for a live entry.
    ///
    /// Unlike `exists`, this records no hit or miss, bumps no access
    /// metadata and leaves an expired entry for the sweep to collect. The
    /// prefetcher uses it so background checks don't skew the counters.
    pub fn is_live(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Clear ==
    /// Removes all entries and resets statistics to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Runs from the background sweep
    /// so entries nobody reads again don't hold capacity until eviction
    /// happens to find them.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.size = self.entries.len();
        removed
    }

    // == Invalidate Matching ==
    /// Removes every entry whose key the matcher accepts.
    ///
    /// Returns the number of entries removed. This is a full-store scan;
    /// removals count as explicit invalidation, not as evictions.
    ///
    /// # Arguments
    /// * `matcher` - Decides which keys belong to the invalidated family
    pub fn invalidate_matching(&mut self, matcher: &dyn KeyMatcher) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !matcher.matches(key));
        let removed = before - self.entries.len();
        self.stats.size = self.entries.len();
        removed
    }

    // == Stats ==
    /// Returns a snapshot copy of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.size = self.entries.len();
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
