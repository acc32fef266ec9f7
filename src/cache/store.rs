//! Summary Cache Module
//!
//! Process-wide key-value store for resolved summaries with TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Summary Cache ==
/// Summary storage keyed by [`summary_cache_key`](crate::cache::summary_cache_key).
///
/// There is no capacity bound; entries leave only when their TTL elapses.
#[derive(Debug, Default)]
pub struct SummaryCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl SummaryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a summary for `ttl_seconds`.
    ///
    /// Overwriting an existing key replaces the value and resets its TTL.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: u64) {
        self.entries.insert(key, CacheEntry::new(value, ttl_seconds));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the summary stored under `key`.
    ///
    /// Expired entries are removed and counted as misses. An entry holding an
    /// empty summary is treated as absent.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) if !entry.value.is_empty() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    #[cfg(test)]
    pub(crate) fn expires_at(&self, key: &str) -> Option<chrono::DateTime<chrono::Utc>> {
        self.entries.get(key).map(|entry| entry.expires_at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::summary_cache_key;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache = SummaryCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = SummaryCache::new();
        let key = summary_cache_key("Python", "en");

        cache.set(key.clone(), "Python is a programming language".to_string(), 3600);

        assert_eq!(cache.get(&key).as_deref(), Some("Python is a programming language"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let mut cache = SummaryCache::new();
        assert!(cache.get("wikipedia_summary_missing_en").is_none());
    }

    #[test]
    fn test_cache_other_language_misses() {
        let mut cache = SummaryCache::new();
        cache.set(summary_cache_key("Rum", "en"), "Rum is a liquor".to_string(), 3600);

        assert!(cache.get(&summary_cache_key("Rum", "cs")).is_none());
        assert!(cache.get(&summary_cache_key("Rum", "en")).is_some());
    }

    #[test]
    fn test_cache_empty_value_is_a_miss() {
        let mut cache = SummaryCache::new();
        cache.set("key".to_string(), String::new(), 3600);

        assert!(cache.get("key").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = SummaryCache::new();

        cache.set("key".to_string(), "first".to_string(), 3600);
        cache.set("key".to_string(), "second".to_string(), 3600);

        assert_eq!(cache.get("key").as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_ttl_expiration() {
        let mut cache = SummaryCache::new();

        cache.set("key".to_string(), "value".to_string(), 1);
        assert!(cache.get("key").is_some());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(cache.get("key").is_none());
        assert!(cache.is_empty(), "Expired entry should be removed on read");
        assert_eq!(cache.stats().expirations, 1);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = SummaryCache::new();

        cache.set("key".to_string(), "value".to_string(), 3600);
        cache.get("key"); // hit
        cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_cache_cleanup_expired() {
        let mut cache = SummaryCache::new();

        cache.set("short".to_string(), "value1".to_string(), 1);
        cache.set("long".to_string(), "value2".to_string(), 3600);

        // Wait for the short entry to expire
        sleep(Duration::from_millis(1100));

        assert_eq!(cache.cleanup_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("long").is_some());
    }
}
