//! Process-wide weather cache
//!
//! Implements `WeatherCachePort` over a [`TtlCache`] guarded by a
//! `parking_lot` mutex. The lock is held only for the map operation.

use std::{sync::Arc, time::Duration};

use application::ports::{CacheKey, CachedWeather, WeatherCachePort};
use parking_lot::Mutex;
use tracing::debug;

use super::ttl_cache::{Clock, SystemClock, TtlCache};
use crate::config::CacheConfig;

/// In-memory weather cache shared between request handlers
pub struct InMemoryWeatherCache {
    inner: Mutex<TtlCache<CacheKey, CachedWeather>>,
}

impl std::fmt::Debug for InMemoryWeatherCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWeatherCache")
            .field("cache", &*self.inner.lock())
            .finish()
    }
}

impl InMemoryWeatherCache {
    /// Create a cache with the given TTL on the system clock
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit clock
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(TtlCache::with_clock(ttl, clock)),
        }
    }

    /// Create a cache from configuration
    ///
    /// A disabled cache gets a zero TTL so every lookup misses.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.effective_ttl())
    }

    /// Number of stored entries, expired ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl WeatherCachePort for InMemoryWeatherCache {
    fn get(&self, key: &CacheKey) -> Option<CachedWeather> {
        self.inner.lock().get(key)
    }

    fn set(&self, key: CacheKey, value: CachedWeather) {
        self.inner.lock().set(key, value);
    }

    fn purge_expired(&self) -> usize {
        let removed = self.inner.lock().purge_expired();
        if removed > 0 {
            debug!(removed, "Purged expired weather cache entries");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use application::ports::CacheKind;
    use domain::{CityName, DailySummary, LanguageCode, Units, WeatherQuery};

    use super::*;
    use crate::cache::ManualClock;

    fn key(kind: CacheKind, city: &str) -> CacheKey {
        let query = WeatherQuery::new(
            CityName::new(city).unwrap(),
            Units::Metric,
            LanguageCode::spanish(),
        );
        CacheKey::new(kind, &query)
    }

    fn forecast() -> CachedWeather {
        CachedWeather::Forecast(vec![DailySummary {
            date: "2024-01-01".to_string(),
            day: "Lun 01".to_string(),
            temp_min: 10.0,
            temp_max: 22.0,
            desc: "nubes".to_string(),
            icon: Some("04d".to_string()),
            pop: 0.15,
        }])
    }

    fn cache() -> (InMemoryWeatherCache, ManualClock) {
        let clock = ManualClock::new();
        let cache =
            InMemoryWeatherCache::with_clock(Duration::from_secs(300), Arc::new(clock.clone()));
        (cache, clock)
    }

    #[test]
    fn round_trip_within_ttl() {
        let (cache, clock) = cache();
        cache.set(key(CacheKind::Forecast, "Lima"), forecast());
        clock.advance(Duration::from_secs(120));
        assert_eq!(cache.get(&key(CacheKind::Forecast, " lima ")), Some(forecast()));
    }

    #[test]
    fn miss_after_ttl() {
        let (cache, clock) = cache();
        cache.set(key(CacheKind::Forecast, "Lima"), forecast());
        clock.advance(Duration::from_secs(300));
        assert_eq!(cache.get(&key(CacheKind::Forecast, "Lima")), None);
    }

    #[test]
    fn kinds_do_not_collide() {
        let (cache, _) = cache();
        cache.set(key(CacheKind::Forecast, "Lima"), forecast());
        assert_eq!(cache.get(&key(CacheKind::Current, "Lima")), None);
    }

    #[test]
    fn purge_removes_only_expired() {
        let (cache, clock) = cache();
        cache.set(key(CacheKind::Forecast, "Lima"), forecast());
        clock.advance(Duration::from_secs(301));
        cache.set(key(CacheKind::Forecast, "Quito"), forecast());

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn disabled_config_never_hits() {
        let config = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };
        let cache = InMemoryWeatherCache::from_config(&config);
        cache.set(key(CacheKind::Forecast, "Lima"), forecast());
        assert_eq!(cache.get(&key(CacheKind::Forecast, "Lima")), None);
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(InMemoryWeatherCache::new(Duration::from_secs(300)));
        let handles: Vec<_> = ["Lima", "Quito", "Bogota", "Santiago"]
            .into_iter()
            .map(|city| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.set(key(CacheKind::Forecast, city), forecast());
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
