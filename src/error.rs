//! Error types for the caching layer
//!
//! Provides unified error handling using thiserror. Cache misses are not
//! errors (lookups return `Option`); only genuine faults are represented
//! here.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the caching layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be serialized for storage
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalidation pattern did not compile as a regex
    #[error("invalid key pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the caching layer.
pub type Result<T> = std::result::Result<T, CacheError>;
