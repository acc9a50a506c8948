//! Generation tickets for last-intent-wins tracking.

use std::collections::HashMap;
use std::hash::Hash;

/// Identifies one issued asynchronous intent.
///
/// A ticket is handed out when an intent begins and must be presented again to resolve it.
/// Only the ticket with the highest generation for its kind is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket<K> {
    pub kind: K,
    pub generation: u64,
}

/// Monotonic generation counters, one per intent kind.
#[derive(Debug)]
pub struct Generations<K> {
    latest: HashMap<K, u64>,
}

impl<K: Eq + Hash + Copy> Generations<K> {
    pub fn new() -> Self {
        Self {
            latest: HashMap::new(),
        }
    }

    /// Issues a new ticket for `kind`, superseding every earlier ticket of that kind.
    pub fn issue(&mut self, kind: K) -> Ticket<K> {
        let counter = self.latest.entry(kind).or_insert(0);
        *counter += 1;
        Ticket {
            kind,
            generation: *counter,
        }
    }

    /// Returns `true` if `ticket` is the most recently issued ticket of its kind.
    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.latest.get(&ticket.kind) == Some(&ticket.generation)
    }
}

impl<K: Eq + Hash + Copy> Default for Generations<K> {
    fn default() -> Self {
        Self::new()
    }
}
