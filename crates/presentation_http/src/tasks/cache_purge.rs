//! Weather cache purge task
//!
//! Expired entries are already ignored on lookup; this task only reclaims
//! their memory for cities that are never asked for again.

use std::{sync::Arc, time::Duration};

use application::ports::WeatherCachePort;
use tracing::{debug, info};

/// Spawn a background task that periodically purges expired cache entries.
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
///
/// # Example
///
/// ```ignore
/// let purge_handle = spawn_cache_purge_task(cache, Duration::from_secs(600));
///
/// // On shutdown:
/// purge_handle.abort();
/// ```
pub fn spawn_cache_purge_task(
    cache: Arc<dyn WeatherCachePort>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        "Starting weather cache purge task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't run immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.purge_expired();
            if removed > 0 {
                info!(removed_count = removed, "Purged expired weather entries");
            } else {
                debug!("No expired weather entries to purge");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use application::ports::{CacheKey, CachedWeather};

    use super::*;

    struct CountingCache {
        purge_calls: AtomicUsize,
    }

    impl WeatherCachePort for CountingCache {
        fn get(&self, _: &CacheKey) -> Option<CachedWeather> {
            None
        }

        fn set(&self, _: CacheKey, _: CachedWeather) {}

        fn purge_expired(&self) -> usize {
            self.purge_calls.fetch_add(1, Ordering::SeqCst);
            1
        }
    }

    #[tokio::test]
    async fn purge_task_runs_periodically() {
        let cache = Arc::new(CountingCache {
            purge_calls: AtomicUsize::new(0),
        });

        let handle = spawn_cache_purge_task(cache.clone(), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.abort();

        assert!(cache.purge_calls.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn purge_task_can_be_aborted() {
        let cache = Arc::new(CountingCache {
            purge_calls: AtomicUsize::new(0),
        });

        let handle = spawn_cache_purge_task(cache.clone(), Duration::from_secs(3600));
        handle.abort();

        assert!(handle.await.unwrap_err().is_cancelled());
        assert_eq!(cache.purge_calls.load(Ordering::SeqCst), 0);
    }
}
