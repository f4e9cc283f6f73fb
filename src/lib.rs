//! Taskstash - In-process caching for the task management backend
//!
//! Shields a cold-starting backend from redundant round-trips to its data
//! store: TTL tiers, LRU eviction, get-or-compute orchestration, best-effort
//! prefetching and pattern-based bulk invalidation behind one cloneable
//! handle.
//!
//! # Example
//! ```ignore
//! let config = CacheConfig::from_env();
//! let cache = SharedCache::from_config(&config);
//! let sweep_handle = spawn_sweep_task(cache.clone(), config.sweep_interval);
//!
//! let task: TaskDto = cache
//!     .get_or_set(&keys::task(7), None, || repo.load_task(7))
//!     .await?;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod tasks;

pub use cache::{SharedCache, COLD_TTL, HOT_TTL, WARM_TTL};
pub use config::CacheConfig;
pub use error::CacheError;
pub use tasks::spawn_sweep_task;
