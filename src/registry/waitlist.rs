//! Ordered, duplicate-free wait list
//!
//! Insertion order is arrival order. Order is kept for inspection and for the
//! broadcast snapshot; it grants no priority when the resource frees up.

use crate::subscriber::{Subscriber, SubscriberId};

/// Subscribers waiting for a resource
#[derive(Debug, Default)]
pub struct WaitList {
    entries: Vec<Subscriber>,
}

impl WaitList {
    /// Create an empty wait list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty wait list with room for `capacity` subscribers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a subscriber unless it is already waiting
    ///
    /// Returns `true` if the subscriber was added.
    pub(crate) fn push(&mut self, subscriber: Subscriber) -> bool {
        if self.contains(subscriber.id()) {
            return false;
        }
        self.entries.push(subscriber);
        true
    }

    /// Remove a subscriber, keeping the order of the rest
    ///
    /// Returns `true` if the subscriber was waiting.
    pub(crate) fn remove(&mut self, id: &SubscriberId) -> bool {
        match self.entries.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove a subscriber only if its entry uses the same capability
    ///
    /// Returns `true` if the entry was removed. An entry with the same id but
    /// a different capability (re-requested since) is left alone.
    pub(crate) fn remove_if_same(&mut self, subscriber: &Subscriber) -> bool {
        let position = self
            .entries
            .iter()
            .position(|s| s.id() == subscriber.id() && s.same_channel(subscriber));
        match position {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if a subscriber is waiting
    pub fn contains(&self, id: &SubscriberId) -> bool {
        self.entries.iter().any(|s| s.id() == id)
    }

    /// Ids of waiting subscribers in arrival order
    pub fn ids(&self) -> Vec<SubscriberId> {
        self.entries.iter().map(|s| s.id().clone()).collect()
    }

    /// Copy of the waiting subscribers, for broadcasting
    pub fn snapshot(&self) -> Vec<Subscriber> {
        self.entries.clone()
    }

    /// Number of waiting subscribers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody is waiting
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
