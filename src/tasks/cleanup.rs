//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries, so the
//! memory held by stale entries is bounded between accesses. Correctness
//! never depends on it: lookups treat expired entries as absent on their
//! own.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PermissionCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Each sweep snapshots the expired keys under a read lock, then removes
/// them one write-lock acquisition at a time, so concurrent lookups are
/// never stalled behind a full-table sweep. An entry refreshed between
/// snapshot and removal is left alone.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<PermissionCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let expired = {
                let cache_guard = cache.read().await;
                cache_guard.expired_keys()
            };

            let mut removed = 0;
            for key in &expired {
                let mut cache_guard = cache.write().await;
                if cache_guard.remove_if_expired(key) {
                    removed += 1;
                }
            }

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
