//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL applied to entries stored without an explicit TTL
    pub default_ttl: Duration,
    /// Interval between background sweeps of expired entries
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            default_ttl: Duration::from_millis(
                env::var("DEFAULT_TTL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(300_000),
            ),
            sweep_interval: Duration::from_secs(
                env::var("SWEEP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: Duration::from_millis(300_000),
            sweep_interval: Duration::from_secs(30),
        }
    }
}
