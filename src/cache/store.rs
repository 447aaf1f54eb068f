//! Cache Store Module
//!
//! Bounded key-value store combining HashMap storage with LRU tracking.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::cache::{CacheStats, RecencyTracker};
use crate::error::{C32Error, Result};

// == LRU Store ==
/// Bounded map with strict least-recently-used eviction.
///
/// Capacity is fixed at construction. Both `get` and `put` promote the
/// touched key to most recently used; inserting a new key at capacity
/// evicts exactly the single least recently used entry first, so
/// `len() <= capacity()` holds at all times.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// LRU access tracker
    lru: RecencyTracker<K>,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new empty store.
    ///
    /// # Errors
    /// Returns [`C32Error::InvalidCapacity`] for a zero capacity — a store
    /// that can hold nothing is a configuration mistake, not a cache.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(C32Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            lru: RecencyTracker::new(),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves the value for a key, promoting it to most recently used.
    ///
    /// A miss has no side effect beyond the miss counter.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key is overwritten and promoted with no size change. A
    /// new key arriving at capacity evicts the least recently used entry
    /// first.
    pub fn put(&mut self, key: K, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            // Tracker and entries hold exactly the same keys, so a victim
            // always exists here
            if let Some(victim) = self.lru.evict_oldest() {
                self.entries.remove(&victim);
                self.stats.record_eviction();
                trace!(len = self.entries.len(), "evicted least recently used entry");
            }
        }

        self.entries.insert(key.clone(), value);
        self.lru.touch(&key);
    }

    // == Introspection ==
    /// Current entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed maximum entry count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    // == Reset ==
    /// Empties all entries and counters. Capacity is unchanged.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats = CacheStats::new();
        trace!(capacity = self.capacity, "store reset");
    }
}
