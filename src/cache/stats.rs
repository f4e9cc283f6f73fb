//! Cache Statistics Module
//!
//! Plain counters describing cache effectiveness. The store owns the only
//! mutable instance and updates the fields directly; callers receive
//! snapshot copies and derive rates from those.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of cache traffic and occupancy.
///
/// `size` reflects the entry count as of the last membership change. Expiry
/// is lazy, so entries that have expired but not yet been touched by a read
/// or a sweep still count towards it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found nothing, expired entries included
    pub misses: u64,
    /// Entries removed to make room for an insert
    pub evictions: u64,
    /// Entries currently held
    pub size: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Fraction of lookups served from the cache, 0.0 before any traffic.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
