//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order
//! tracking for FIFO eviction and per-entry TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == TTL Cache ==
/// Bounded in-memory cache with per-entry TTL and FIFO eviction.
///
/// Eviction order is by insertion/update time only: a lookup never promotes
/// an entry, so this is a bounded-FIFO cache with TTL, not a true LRU. The
/// cache treats keys and values as opaque and never rejects valid input;
/// absence is a normal outcome, not an error.
///
/// All methods take `&mut self` and complete synchronously. Callers sharing
/// a cache across tasks wrap it in a single async mutex and hold the lock
/// only across these synchronous bodies, never across an upstream await.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Insertion-order tracker for FIFO eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Default TTL in seconds for entries without an explicit TTL
    default_ttl: u64,
}

impl<T: Clone> TtlCache<T> {
    // == Constructor ==
    /// Creates a new TtlCache with the given capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `default_ttl` - Default TTL in seconds for entries without explicit TTL
    pub fn new(max_size: usize, default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_size,
            default_ttl,
        }
    }

    // == Get ==
    /// Looks up a key, returning the entry if present and not expired.
    ///
    /// An expired entry is removed as a side effect (lazy expiry) and
    /// reported absent. A hit does not alter the insertion order; only
    /// `set` reorders keys.
    ///
    /// The full entry is returned so callers can read `expires_at` for
    /// response metadata.
    pub fn get(&mut self, key: &str) -> Option<CacheEntry<T>> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                self.stats.set_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair, returning the computed expiry timestamp
    /// (Unix milliseconds).
    ///
    /// An existing key has its value and expiry replaced and is moved to
    /// the most-recent insertion position. When a fresh insert would exceed
    /// `max_size`, exactly one entry is evicted first: the oldest-inserted
    /// one. A TTL of zero stores an already-expired entry.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses `default_ttl` if None)
    pub fn set(&mut self, key: String, value: T, ttl: Option<u64>) -> u64 {
        let is_overwrite = self.entries.contains_key(&key);

        // One-in-one-out: evict only when a fresh insert is the limiting factor
        if !is_overwrite && self.entries.len() >= self.max_size {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        let expires_at = entry.expires_at;
        self.entries.insert(key.clone(), entry);
        self.order.record(&key);
        self.stats.set_entries(self.entries.len());

        expires_at
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it was present.
    #[allow(dead_code)]
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes all entries.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order = InsertionOrder::new();
        self.stats.set_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes every entry whose TTL has elapsed at scan time.
    ///
    /// Returns the number of entries removed. This never evicts for
    /// capacity; capacity is enforced only in `set`.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.record_expired(count as u64);
        self.stats.set_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the structural entry count.
    ///
    /// Expired entries that have not yet been lazily removed or swept are
    /// still counted; this is a raw count, not a live count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Max Size ==
    /// Returns the configured capacity bound.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread::sleep;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[test]
    fn test_cache_new() {
        let cache: TtlCache<String> = TtlCache::new(100, 300);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.max_size(), 100);
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        let entry = cache.get("key1").unwrap();

        assert_eq!(entry.value, "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_nonexistent_returns_none() {
        let mut cache: TtlCache<String> = TtlCache::new(100, 300);

        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn test_delete() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);

        assert!(cache.delete("key1"));
        assert!(cache.is_empty());
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_delete_nonexistent_returns_false() {
        let mut cache: TtlCache<String> = TtlCache::new(100, 300);

        assert!(!cache.delete("nonexistent"));
    }

    #[test]
    fn test_clear() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        cache.set("key2".to_string(), "value2".to_string(), None);

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_overwrite_replaces_value_and_expiry() {
        let mut cache = TtlCache::new(100, 300);

        let first_expiry = cache.set("key1".to_string(), "value1".to_string(), Some(10));
        let second_expiry = cache.set("key1".to_string(), "value2".to_string(), Some(600));

        let entry = cache.get("key1").unwrap();
        assert_eq!(entry.value, "value2");
        assert_eq!(entry.expires_at, second_expiry);
        assert!(second_expiry > first_expiry);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_expiration_on_get() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("key1".to_string(), "value1".to_string(), Some(1));

        assert!(cache.get("key1").is_some());

        sleep(Duration::from_millis(1100));

        assert!(cache.get("key1").is_none());
        // Lazy expiry physically removed the entry
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_len_counts_expired_unswept_entries() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("dead".to_string(), "value".to_string(), Some(0));

        // Structural count includes the expired entry until a get or sweep
        assert_eq!(cache.len(), 1);

        assert!(cache.get("dead").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let mut cache = TtlCache::new(3, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        cache.set("key2".to_string(), "value2".to_string(), None);
        cache.set("key3".to_string(), "value3".to_string(), None);

        // Cache is full, adding key4 evicts key1 (oldest inserted)
        cache.set("key4".to_string(), "value4".to_string(), None);

        assert_eq!(cache.len(), 3);
        assert!(cache.get("key1").is_none());
        assert!(cache.get("key2").is_some());
        assert!(cache.get("key3").is_some());
        assert!(cache.get("key4").is_some());
    }

    #[test]
    fn test_get_does_not_protect_from_eviction() {
        let mut cache = TtlCache::new(3, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        cache.set("key2".to_string(), "value2".to_string(), None);
        cache.set("key3".to_string(), "value3".to_string(), None);

        // A read is not a touch: key1 stays the eviction candidate
        cache.get("key1").unwrap();
        cache.set("key4".to_string(), "value4".to_string(), None);

        assert!(cache.get("key1").is_none());
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_reinsert_moves_key_to_most_recent() {
        let mut cache = TtlCache::new(3, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        cache.set("key2".to_string(), "value2".to_string(), None);
        cache.set("key3".to_string(), "value3".to_string(), None);

        // Re-set key1: it becomes most recent, key2 becomes the candidate
        cache.set("key1".to_string(), "updated".to_string(), None);
        cache.set("key4".to_string(), "value4".to_string(), None);

        assert_eq!(cache.get("key1").unwrap().value, "updated");
        assert!(cache.get("key2").is_none());
    }

    #[test]
    fn test_example_scenario_two_slot_cache() {
        let mut cache = TtlCache::new(2, 300);

        cache.set("a".to_string(), 1, None);
        cache.set("b".to_string(), 2, None);
        cache.set("c".to_string(), 3, None);

        assert!(cache.get("a").is_none());
        assert_eq!(cache.get("b").unwrap().value, 2);
        assert_eq!(cache.get("c").unwrap().value, 3);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cleanup_expired() {
        let mut cache = TtlCache::new(100, 300);

        cache.set("key1".to_string(), "value1".to_string(), Some(0));
        cache.set("key2".to_string(), "value2".to_string(), Some(10));

        let removed = cache.cleanup_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_cleanup_expired_never_evicts_live_entries() {
        let mut cache = TtlCache::new(2, 300);

        cache.set("key1".to_string(), "value1".to_string(), Some(600));
        cache.set("key2".to_string(), "value2".to_string(), Some(600));

        assert_eq!(cache.cleanup_expired(), 0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_stats_tracking() {
        let mut cache = TtlCache::new(1, 300);

        cache.set("key1".to_string(), "value1".to_string(), None);
        cache.get("key1"); // hit
        cache.get("nope"); // miss
        cache.set("key2".to_string(), "value2".to_string(), None); // evicts key1

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_concurrent_sets_distinct_keys() {
        let cache = Arc::new(Mutex::new(TtlCache::new(100, 300)));

        let mut handles = Vec::new();
        for i in 0..20 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let mut guard = cache.lock().await;
                guard.set(format!("key{}", i), format!("value{}", i), None);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut guard = cache.lock().await;
        assert_eq!(guard.len(), 20);
        for i in 0..20 {
            let entry = guard.get(&format!("key{}", i)).unwrap();
            assert_eq!(entry.value, format!("value{}", i));
        }
    }

    #[tokio::test]
    async fn test_concurrent_sets_respect_capacity() {
        let cache = Arc::new(Mutex::new(TtlCache::new(10, 300)));

        let mut handles = Vec::new();
        for i in 0..30 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let mut guard = cache.lock().await;
                guard.set(format!("key{}", i), i, None);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let guard = cache.lock().await;
        assert_eq!(guard.len(), 10);
    }

    #[tokio::test]
    async fn test_concurrent_sets_same_key_last_wins() {
        let cache = Arc::new(Mutex::new(TtlCache::new(100, 300)));

        // Two racing writers for the same key, as two request handlers that
        // both missed would produce. Both succeed; one value remains.
        let first = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache.lock().await.set("shared".to_string(), "one".to_string(), None);
            })
        };
        let second = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache.lock().await.set("shared".to_string(), "two".to_string(), None);
            })
        };
        first.await.unwrap();
        second.await.unwrap();

        let mut guard = cache.lock().await;
        assert_eq!(guard.len(), 1);
        let value = guard.get("shared").unwrap().value;
        assert!(value == "one" || value == "two");
    }
}
