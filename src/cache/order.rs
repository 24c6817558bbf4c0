//! Insertion Order Tracker Module
//!
//! Tracks the order in which keys were inserted, for FIFO eviction.
//!
//! Unlike a true LRU tracker, reads never reorder keys here: only an
//! insert or a re-insert of the same key moves it to the most-recent
//! position. Eviction therefore always removes the oldest-inserted key.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks key insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently inserted
/// - Back = Oldest inserted
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered by insertion time
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records an insertion, moving the key to the most-recent position.
    ///
    /// A re-inserted key is removed from its old position first, so it
    /// counts as a fresh insertion for eviction ordering.
    pub fn record(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
