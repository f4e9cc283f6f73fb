//! Cache Module
//!
//! Provides in-process caching with TTL expiration, LRU eviction, typed
//! serde accessors and pattern-based bulk invalidation.

use std::time::Duration;

mod entry;
mod eviction;
mod matcher;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use matcher::{KeyMatcher, PrefixMatcher, RegexMatcher};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == TTL Tiers ==
/// TTL for data expected to change frequently (full task listings and other
/// fast-moving views).
pub const HOT_TTL: Duration = Duration::from_millis(60_000);

/// TTL for per-user data that changes at a moderate rate.
pub const WARM_TTL: Duration = Duration::from_millis(300_000);

/// TTL for expensive-to-recompute, rarely-changing aggregates.
pub const COLD_TTL: Duration = Duration::from_millis(600_000);
