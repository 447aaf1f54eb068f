//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == Recency Tracker ==
/// Tracks access order for LRU eviction, generic over the key type.
///
/// Every touch stamps the key with a fresh monotonic sequence number; the
/// ordered index maps sequence numbers back to keys, so the smallest
/// sequence number is always the least recently used key. Touch, remove
/// and eviction are all O(log n).
#[derive(Debug)]
pub struct RecencyTracker<K> {
    /// Sequence number assigned at the most recent touch of each key
    stamps: HashMap<K, u64>,
    /// Keys ordered by their current sequence number (oldest first)
    order: BTreeMap<u64, K>,
    /// Next sequence number to hand out
    next_seq: u64,
}

impl<K> RecencyTracker<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            stamps: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// Re-stamps an existing key; registers a new one.
    pub fn touch(&mut self, key: &K) {
        if let Some(old_seq) = self.stamps.remove(key) {
            self.order.remove(&old_seq);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.stamps.insert(key.clone(), seq);
        self.order.insert(seq, key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are a no-op.
    pub fn remove(&mut self, key: &K) {
        if let Some(seq) = self.stamps.remove(key) {
            self.order.remove(&seq);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let (&seq, _) = self.order.iter().next()?;
        let key = self.order.remove(&seq)?;
        self.stamps.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.values().next()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.stamps.contains_key(key)
    }

    // == Clear ==
    /// Drops all tracked keys. Sequence numbers keep counting up.
    pub fn clear(&mut self) {
        self.stamps.clear();
        self.order.clear();
    }
}

impl<K> Default for RecencyTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_new() {
        let tracker: RecencyTracker<String> = RecencyTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.len(), 0);
        assert_eq!(tracker.peek_oldest(), None);
    }

    #[test]
    fn test_touch_new_keys() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"key1");
        tracker.touch(&"key2");
        tracker.touch(&"key3");

        assert_eq!(tracker.len(), 3);
        // key1 was touched first, so it is oldest
        assert_eq!(tracker.peek_oldest(), Some(&"key1"));
    }

    #[test]
    fn test_touch_existing_key_promotes() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"key1");
        tracker.touch(&"key2");
        tracker.touch(&"key3");

        // Touch key1 again: key2 becomes oldest
        tracker.touch(&"key1");

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.peek_oldest(), Some(&"key2"));
    }

    #[test]
    fn test_evict_oldest_order() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"a");
        tracker.touch(&"b");
        tracker.touch(&"c");

        // Promote in a different order; eviction must follow recency
        tracker.touch(&"a");
        tracker.touch(&"c");
        tracker.touch(&"b");

        assert_eq!(tracker.evict_oldest(), Some("a"));
        assert_eq!(tracker.evict_oldest(), Some("c"));
        assert_eq!(tracker.evict_oldest(), Some("b"));
        assert_eq!(tracker.evict_oldest(), None);
    }

    #[test]
    fn test_remove() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"key1");
        tracker.touch(&"key2");
        tracker.touch(&"key3");

        tracker.remove(&"key2");

        assert_eq!(tracker.len(), 2);
        assert!(!tracker.contains(&"key2"));
        assert!(tracker.contains(&"key1"));
        assert!(tracker.contains(&"key3"));
    }

    #[test]
    fn test_remove_unknown_key() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"key1");
        tracker.remove(&"ghost");

        assert_eq!(tracker.len(), 1);
        assert!(tracker.contains(&"key1"));
    }

    #[test]
    fn test_touch_same_key_repeatedly() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"key1");
        tracker.touch(&"key1");
        tracker.touch(&"key1");

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.evict_oldest(), Some("key1"));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut tracker = RecencyTracker::new();

        tracker.touch(&"a");
        tracker.touch(&"b");
        tracker.clear();

        assert!(tracker.is_empty());
        assert_eq!(tracker.evict_oldest(), None);

        // Still usable after clearing
        tracker.touch(&"c");
        assert_eq!(tracker.peek_oldest(), Some(&"c"));
    }
}
