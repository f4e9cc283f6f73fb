//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries, bounding
//! the memory held by entries nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps out expired entries.
///
/// The task runs in an infinite loop, sleeping for the given interval
/// between sweeps. Each sweep takes the same lock as foreground operations,
/// so it never observes the store mid-change.
///
/// # Arguments
/// * `cache` - Handle to the cache to sweep
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::from_config(&config);
/// let sweep_handle = spawn_sweep_task(cache.clone(), config.sweep_interval);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup().await;

            // Log sweep statistics
            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
