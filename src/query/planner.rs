//! Query planner — picks the one index probe (or full scan) for a pattern.

use crate::types::{Iri, Subject, Term, Triple, TriplePattern};

/// The candidate source chosen for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Probe the subject index with this value.
    Subject(Subject),
    /// Probe the predicate index with this value.
    Predicate(Iri),
    /// Probe the object index with this value.
    Object(Term),
    /// Enumerate the full canonical set.
    FullScan,
}

/// Equality checks still to be applied to each candidate after the probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Residual {
    predicate: Option<Iri>,
    object: Option<Term>,
}

impl Residual {
    /// Whether a candidate passes every remaining bound-field check.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.predicate
            .as_ref()
            .map_or(true, |p| p == triple.predicate())
            && self.object.as_ref().map_or(true, |o| o == triple.object())
    }

    /// Whether there is nothing left to check.
    pub fn is_empty(&self) -> bool {
        self.predicate.is_none() && self.object.is_none()
    }
}

/// A planned query: where candidates come from and what still has to be
/// checked on each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub probe: Probe,
    pub residual: Residual,
}

/// Plan a pattern query.
///
/// At most one index is ever probed; additional bound fields become residual
/// equality checks on the (already small) candidate set rather than index
/// intersections. The priority order is fixed: subject, then predicate, then
/// object, then full scan.
pub fn plan(pattern: &TriplePattern) -> QueryPlan {
    if let Some(subject) = pattern.subject() {
        QueryPlan {
            probe: Probe::Subject(subject.clone()),
            residual: Residual {
                predicate: pattern.predicate().cloned(),
                object: pattern.object().cloned(),
            },
        }
    } else if let Some(predicate) = pattern.predicate() {
        QueryPlan {
            probe: Probe::Predicate(predicate.clone()),
            residual: Residual {
                predicate: None,
                object: pattern.object().cloned(),
            },
        }
    } else if let Some(object) = pattern.object() {
        // The probe itself was the only constraint.
        QueryPlan {
            probe: Probe::Object(object.clone()),
            residual: Residual::default(),
        }
    } else {
        QueryPlan {
            probe: Probe::FullScan,
            residual: Residual::default(),
        }
    }
}
