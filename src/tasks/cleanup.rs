//! TTL Cleanup Task
//!
//! Background task that periodically removes expired summaries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SummaryCache;

/// Spawns a background task that periodically sweeps expired summaries.
///
/// Expired entries are already never served; the sweep only keeps summaries
/// nobody asks for again from accumulating.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<SummaryCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!(
                    "TTL cleanup: removed {} expired summaries ({} expired in total), {} cached, hit rate {:.2}",
                    removed,
                    stats.expirations,
                    stats.total_entries,
                    stats.hit_rate()
                );
            } else {
                debug!("TTL cleanup: no expired summaries found");
            }
        }
    })
}
