//! Insertion Order Module
//!
//! Remembers the order in which keys entered the store so listings are stable.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks key insertion order for listing.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion
/// - Back = Newest insertion
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys in the order they were inserted
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty order tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a freshly inserted key at the back.
    ///
    /// Merging into an existing entry must not call this; only new keys move.
    pub fn push(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
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
}
