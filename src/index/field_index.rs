//! Index by one triple field — maps each field value to the triples carrying it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::Triple;

/// Maps each value of one field role (subject, predicate, or object) to the
/// set of triples having that value in that field.
///
/// The owning graph is the only writer; an index is never mutated
/// independently of the canonical set.
pub struct FieldIndex<K> {
    index: HashMap<K, HashSet<Triple>>,
}

impl<K: Eq + Hash> FieldIndex<K> {
    /// Create a new, empty index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Add a triple under the given field value, creating the bucket on
    /// first use.
    pub fn insert(&mut self, key: K, triple: Triple) {
        self.index.entry(key).or_default().insert(triple);
    }

    /// Remove a triple from the given field value's bucket. Empty buckets
    /// are dropped so that stale keys do not accumulate.
    pub fn remove(&mut self, key: &K, triple: &Triple) {
        if let Some(bucket) = self.index.get_mut(key) {
            bucket.remove(triple);
            if bucket.is_empty() {
                self.index.remove(key);
            }
        }
    }

    /// Get the triples indexed under a value. Absence is an empty result,
    /// never an error.
    pub fn get(&self, key: &K) -> Option<&HashSet<Triple>> {
        self.index.get(key)
    }

    /// Number of triples indexed under a value.
    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map(|b| b.len()).unwrap_or(0)
    }

    /// Number of distinct field values present.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Total number of triple entries across all values. Every triple is
    /// indexed under exactly one value per field role, so this must equal the
    /// owning graph's size.
    pub fn triple_count(&self) -> usize {
        self.index.values().map(|b| b.len()).sum()
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
    }
}

impl<K: Eq + Hash> Default for FieldIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
