//! Core graph structure — canonical triple set plus three field indexes.

use std::collections::HashSet;

use crate::index::FieldIndex;
use crate::query::planner::{plan, Probe};
use crate::query::TripleCursor;
use crate::types::{Iri, Subject, Term, Triple, TriplePattern};

/// An in-memory triple collection with one index per field role.
///
/// The canonical set is the single source of truth for membership and size;
/// the three indexes are derived state and only ever mutated together with
/// it, inside this type. The `version` counter is bumped on every mutation
/// that actually changes membership and backs the cursors' fail-fast check.
/// It is a detection mechanism, not a lock: concurrent mutation still needs
/// external synchronization.
pub struct IndexedGraph {
    /// All triples. Authoritative for membership and size.
    triples: HashSet<Triple>,
    /// Index: subject value -> triples with that subject.
    by_subject: FieldIndex<Subject>,
    /// Index: predicate value -> triples with that predicate.
    by_predicate: FieldIndex<Iri>,
    /// Index: object value -> triples with that object.
    by_object: FieldIndex<Term>,
    /// Modification counter, bumped on every structural change.
    version: u64,
}

impl IndexedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            triples: HashSet::new(),
            by_subject: FieldIndex::new(),
            by_predicate: FieldIndex::new(),
            by_object: FieldIndex::new(),
            version: 0,
        }
    }

    /// Create a graph pre-populated from any triple sequence.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut graph = Self::new();
        let mut imported = 0usize;
        for triple in triples {
            if graph.add(triple) {
                imported += 1;
            }
        }
        log::debug!("bulk import: {imported} triples");
        graph
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// O(1) membership check against the canonical set.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Current modification counter. Cursors capture this at creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Insert a triple into the canonical set and all three indexes.
    ///
    /// Set semantics: inserting a triple already present is a no-op. Returns
    /// whether membership changed; the counter is bumped only in that case.
    pub fn add(&mut self, triple: Triple) -> bool {
        if !self.triples.insert(triple.clone()) {
            return false;
        }
        self.by_subject.insert(triple.subject().clone(), triple.clone());
        self.by_predicate.insert(triple.predicate().clone(), triple.clone());
        self.by_object.insert(triple.object().clone(), triple);
        self.version += 1;
        true
    }

    /// Remove a triple from the canonical set and all three indexes.
    ///
    /// Removing an absent triple is a no-op. Returns whether membership
    /// changed; the counter is bumped only in that case.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        if !self.triples.remove(triple) {
            return false;
        }
        self.by_subject.remove(triple.subject(), triple);
        self.by_predicate.remove(triple.predicate(), triple);
        self.by_object.remove(triple.object(), triple);
        self.version += 1;
        true
    }

    /// Remove every triple that is a member of `other`, one at a time.
    /// Returns how many were actually removed.
    pub fn remove_all(&mut self, other: &IndexedGraph) -> usize {
        let mut removed = 0usize;
        for triple in &other.triples {
            if self.remove(triple) {
                removed += 1;
            }
        }
        log::debug!("remove_all: {removed} triples removed");
        removed
    }

    /// Keep only the triples that are members of `other`. Returns how many
    /// were removed.
    pub fn retain_all(&mut self, other: &IndexedGraph) -> usize {
        let doomed: Vec<Triple> = self
            .triples
            .iter()
            .filter(|t| !other.contains(t))
            .cloned()
            .collect();
        for triple in &doomed {
            self.remove(triple);
        }
        log::debug!("retain_all: {} triples removed", doomed.len());
        doomed.len()
    }

    /// Remove every triple.
    pub fn clear(&mut self) {
        if self.triples.is_empty() {
            return;
        }
        self.triples.clear();
        self.by_subject.clear();
        self.by_predicate.clear();
        self.by_object.clear();
        self.version += 1;
    }

    /// Query the graph with a pattern, returning a cursor over the matches.
    ///
    /// This is the single traversal entry point; the all-wildcard pattern
    /// enumerates the whole graph. The planner picks at most one index probe
    /// (subject, then predicate, then object, in that priority); remaining
    /// bound fields are applied lazily by the cursor as residual checks.
    pub fn query(&self, pattern: &TriplePattern) -> TripleCursor {
        let plan = plan(pattern);
        let candidates: Vec<Triple> = match &plan.probe {
            Probe::Subject(s) => self.bucket(self.by_subject.get(s)),
            Probe::Predicate(p) => self.bucket(self.by_predicate.get(p)),
            Probe::Object(o) => self.bucket(self.by_object.get(o)),
            Probe::FullScan => self.triples.iter().cloned().collect(),
        };
        TripleCursor::new(candidates, plan.residual, self.version)
    }

    fn bucket(&self, set: Option<&HashSet<Triple>>) -> Vec<Triple> {
        set.map(|s| s.iter().cloned().collect()).unwrap_or_default()
    }

    /// Index sanity check used by tests: each index must hold exactly one
    /// entry per member triple.
    #[doc(hidden)]
    pub fn index_entry_counts(&self) -> (usize, usize, usize) {
        (
            self.by_subject.triple_count(),
            self.by_predicate.triple_count(),
            self.by_object.triple_count(),
        )
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Consuming iteration, so one graph can seed another via `from_triples`.
/// Live traversal of a graph still goes through `query`.
impl IntoIterator for IndexedGraph {
    type Item = Triple;
    type IntoIter = std::collections::hash_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl FromIterator<Triple> for IndexedGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self::from_triples(iter)
    }
}

impl Extend<Triple> for IndexedGraph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add(triple);
        }
    }
}
