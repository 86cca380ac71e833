//! Identity registry
//!
//! Assigns small sequential labels to opaque identities (callable
//! addresses) in first-seen order. Labels are never reassigned or evicted
//! while the registry lives.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Thread-safe first-seen label table
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    table: RwLock<HashMap<usize, usize>>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the label for `identity`, assigning the next one on first sight
    ///
    /// The shared read path serves hits; a miss takes the write lock and
    /// checks again before inserting, so two racing callers agree on a
    /// single label.
    pub fn get_or_create(&self, identity: usize) -> usize {
        if let Some(label) = self.get(identity) {
            return label;
        }

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(label) = table.get(&identity) {
            return *label;
        }
        let label = table.len();
        table.insert(identity, label);
        tracing::trace!(identity = identity, label = label, "assigned identity label");
        label
    }

    /// Look up a label without assigning one
    pub fn get(&self, identity: usize) -> Option<usize> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&identity)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_labels_start_at_zero_in_first_seen_order() {
        let registry = IdentityRegistry::new();
        assert_eq!(registry.get_or_create(0xbeef), 0);
        assert_eq!(registry.get_or_create(0xcafe), 1);
        assert_eq!(registry.get_or_create(0xbeef), 0);
        assert_eq!(registry.get_or_create(0x1), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get_does_not_assign() {
        let registry = IdentityRegistry::new();
        assert_eq!(registry.get(7), None);
        assert!(registry.is_empty());
        registry.get_or_create(7);
        assert_eq!(registry.get(7), Some(0));
    }

    #[test]
    fn test_concurrent_callers_agree_on_labels() {
        let registry = Arc::new(IdentityRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    (0..64usize)
                        .map(|id| (id, registry.get_or_create(id * 16)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<(usize, usize)>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), 64);
        for result in &results {
            for (id, label) in result {
                assert_eq!(registry.get(id * 16), Some(*label));
            }
        }

        let mut labels: Vec<usize> = (0..64usize)
            .map(|id| registry.get(id * 16).unwrap())
            .collect();
        labels.sort_unstable();
        assert_eq!(labels, (0..64).collect::<Vec<_>>());
    }
}
