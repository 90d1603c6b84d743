//! Result cursor — lazy, removable, fail-fast view over a query's candidates.

use crate::graph::IndexedGraph;
use crate::types::{GraphError, GraphResult, Triple};

use super::planner::Residual;

/// A single-pass cursor over the triples matching a pattern.
///
/// The cursor is detached from the graph: every operation takes the graph as
/// an argument, so the graph stays free to be read or mutated while a cursor
/// is open. That mutation is what the fail-fast check exists to detect — the
/// cursor captures the graph's modification counter at creation and refuses
/// every subsequent operation once the counter has moved, except when the
/// move came from this cursor's own `remove_current`.
///
/// `remove_current` is only valid immediately after a successful `next`, at
/// most once per delivered triple. This is Java-style external iteration
/// rather than `std::iter::Iterator` so that constraint is enforced
/// structurally instead of by convention.
pub struct TripleCursor {
    /// Candidates from the planned probe, captured at creation. Residual
    /// filtering happens lazily during advancement.
    candidates: Vec<Triple>,
    residual: Residual,
    /// Scan position: candidates before this point have been considered.
    pos: usize,
    /// A matched candidate found by `has_next` but not yet delivered.
    pending: Option<usize>,
    /// The last delivered triple, eligible for `remove_current`.
    delivered: Option<Triple>,
    /// Graph version this cursor expects to observe.
    expected_version: u64,
}

impl TripleCursor {
    pub(crate) fn new(candidates: Vec<Triple>, residual: Residual, version: u64) -> Self {
        Self {
            candidates,
            residual,
            pos: 0,
            pending: None,
            delivered: None,
            expected_version: version,
        }
    }

    /// Whether another matching triple remains. Advances the lazy scan but
    /// does not deliver; calling this between `next` and `remove_current`
    /// does not invalidate the pending removal.
    pub fn has_next(&mut self, graph: &IndexedGraph) -> GraphResult<bool> {
        self.check_version(graph)?;
        if self.pending.is_some() {
            return Ok(true);
        }
        while self.pos < self.candidates.len() {
            let at = self.pos;
            self.pos += 1;
            if self.residual.matches(&self.candidates[at]) {
                self.pending = Some(at);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Deliver the next matching triple, or `None` once exhausted.
    pub fn next(&mut self, graph: &IndexedGraph) -> GraphResult<Option<Triple>> {
        self.has_next(graph)?;
        match self.pending.take() {
            Some(at) => {
                let triple = self.candidates[at].clone();
                self.delivered = Some(triple.clone());
                Ok(Some(triple))
            }
            None => {
                // Requesting past the end ends the delivered state.
                self.delivered = None;
                Ok(None)
            }
        }
    }

    /// Remove the last delivered triple from the graph (canonical set and all
    /// three indexes), keeping this cursor valid.
    ///
    /// Errors with `InvalidCursorState` unless called immediately after a
    /// successful `next`, and at most once per delivery.
    pub fn remove_current(&mut self, graph: &mut IndexedGraph) -> GraphResult<()> {
        self.check_version(graph)?;
        let triple = self.delivered.take().ok_or(GraphError::InvalidCursorState)?;
        graph.remove(&triple);
        // The one mutation path that re-syncs instead of failing.
        self.expected_version = graph.version();
        Ok(())
    }

    fn check_version(&self, graph: &IndexedGraph) -> GraphResult<()> {
        let found = graph.version();
        if found != self.expected_version {
            return Err(GraphError::ConcurrentModification {
                expected: self.expected_version,
                found,
            });
        }
        Ok(())
    }
}
