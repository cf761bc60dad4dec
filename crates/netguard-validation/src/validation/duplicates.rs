//! First-seen-wins duplicate detection for list entries
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::hash::Hash;

/// Remembers the index at which each key first appeared
///
/// The first occurrence is always accepted; later ones are reported as
/// duplicates of it.
#[derive(Debug)]
pub struct FirstSeen<K> {
    seen: HashMap<K, usize>,
}

impl<K: Eq + Hash> Default for FirstSeen<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FirstSeen<K> {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Record `key` at `index`; returns the earlier index if the key was already seen
    pub fn observe(&mut self, key: K, index: usize) -> Option<usize> {
        match self.seen.get(&key) {
            Some(first) => Some(*first),
            None => {
                self.seen.insert(key, index);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut seen = FirstSeen::new();
        assert_eq!(seen.observe(("TCP", "80"), 0), None);
        assert_eq!(seen.observe(("UDP", "80"), 1), None);
        assert_eq!(seen.observe(("TCP", "80"), 2), Some(0));
        assert_eq!(seen.observe(("TCP", "80"), 3), Some(0));
    }
}
