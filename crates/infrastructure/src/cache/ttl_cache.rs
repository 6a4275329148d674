//! Expiring key-value store
//!
//! Entries carry their insertion instant and are considered live while
//! `now - inserted < ttl`. Expiry is evaluated lazily on lookup; nothing runs
//! in the background. [`TtlCache::purge_expired`] reclaims memory on demand.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same instant, so a test can keep a handle while the
/// cache owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    inserted: Instant,
    value: V,
}

/// Generic TTL cache
///
/// Single-owner structure; wrap it in a mutex to share it.
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> std::fmt::Debug for TtlCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.entries.len())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create a cache on the system clock
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache on an explicit clock
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return a copy of the value if it has not expired
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.value.clone())
    }

    /// Insert or replace a value, resetting its age
    pub fn set(&mut self, key: K, value: V) {
        let inserted = self.clock.now();
        self.entries.insert(key, Entry { inserted, value });
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.inserted) < ttl);
        before - self.entries.len()
    }

    /// Number of stored entries, expired ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_live(&self, entry: &Entry<V>, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted) < self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn cache() -> (TtlCache<&'static str, u32>, ManualClock) {
        let clock = ManualClock::new();
        (TtlCache::with_clock(TTL, Arc::new(clock.clone())), clock)
    }

    #[test]
    fn get_before_set_misses() {
        let (cache, _) = cache();
        assert_eq!(cache.get(&"lima"), None);
    }

    #[test]
    fn hit_within_ttl() {
        let (mut cache, clock) = cache();
        cache.set("lima", 1);
        clock.advance(Duration::from_secs(299));
        assert_eq!(cache.get(&"lima"), Some(1));
    }

    #[test]
    fn miss_once_age_reaches_ttl() {
        let (mut cache, clock) = cache();
        cache.set("lima", 1);
        clock.advance(TTL);
        assert_eq!(cache.get(&"lima"), None);
    }

    #[test]
    fn set_resets_age() {
        let (mut cache, clock) = cache();
        cache.set("lima", 1);
        clock.advance(Duration::from_secs(200));
        cache.set("lima", 2);
        clock.advance(Duration::from_secs(200));
        assert_eq!(cache.get(&"lima"), Some(2));
    }

    #[test]
    fn expired_entries_stay_until_purged() {
        let (mut cache, clock) = cache();
        cache.set("lima", 1);
        cache.set("cusco", 2);
        clock.advance(Duration::from_secs(200));
        cache.set("quito", 3);
        clock.advance(Duration::from_secs(150));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.purge_expired(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"quito"), Some(3));
    }

    #[test]
    fn zero_ttl_always_misses() {
        let mut cache = TtlCache::with_clock(Duration::ZERO, Arc::new(ManualClock::new()));
        cache.set("lima", 1);
        assert_eq!(cache.get(&"lima"), None);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();
        clock.advance(Duration::from_secs(5));
        assert_eq!(other.now() - start, Duration::from_secs(5));
    }
}
