//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access
//! metadata for eviction.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry with payload and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, serialized to JSON by the typed layer
    pub value: Value,
    /// Expiration timestamp (Unix milliseconds); every entry expires
    pub expires_at: u64,
    /// Access stamp assigned by the store; larger means more recently read
    pub last_accessed: u64,
    /// Number of successful reads of this entry
    pub access_count: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `value` - The payload to store
    /// * `ttl` - Time until the entry expires
    /// * `stamp` - Access stamp marking the entry as freshly inserted
    pub fn new(value: Value, ttl: Duration, stamp: u64) -> Self {
        Self {
            value,
            expires_at: expiry_timestamp(ttl),
            last_accessed: stamp,
            access_count: 0,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// strictly past the expiration time. At the exact expiration instant it
    /// still counts as alive.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }

    // == Touch ==
    /// Records a successful read: bumps the access stamp and read counter.
    ///
    /// The stamp never moves backwards, so eviction order stays consistent
    /// even if stamps arrive out of order.
    pub fn touch(&mut self, stamp: u64) {
        self.last_accessed = self.last_accessed.max(stamp);
        self.access_count += 1;
    }

    // == Reset ==
    /// Replaces the payload and restarts the TTL.
    ///
    /// Access metadata is left untouched: overwriting a value is not a read,
    /// so it must not protect the entry from eviction.
    pub fn reset(&mut self, value: Value, ttl: Duration) {
        self.value = value;
        self.expires_at = expiry_timestamp(ttl);
    }

    // == Time To Live ==
    /// Returns the remaining time before expiry, zero if already due.
    ///
    /// This method is useful for debugging and statistics purposes.
    pub fn remaining_ttl(&self) -> Duration {
        Duration::from_millis(self.expires_at.saturating_sub(current_timestamp_ms()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Returns the expiration timestamp for an entry stored now with `ttl`.
fn expiry_timestamp(ttl: Duration) -> u64 {
    let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
    current_timestamp_ms().saturating_add(ttl_ms)
}
