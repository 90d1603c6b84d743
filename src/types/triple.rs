//! The triple value type and the pattern used to query it.

use std::fmt;

use serde::Serialize;

use super::term::{Iri, Subject, Term};

/// A single (subject, predicate, object) statement — the atomic unit of the
/// graph. Immutable; equality and hashing are structural over all three
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Triple {
    subject: Subject,
    predicate: Iri,
    object: Term,
}

impl Triple {
    /// Create a new triple.
    pub fn new(
        subject: impl Into<Subject>,
        predicate: Iri,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// The subject term.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The predicate IRI.
    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    /// The object term.
    pub fn object(&self) -> &Term {
        &self.object
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A query template: each field is either bound to a concrete term or a
/// wildcard (`None`). The default pattern is all-wildcard and matches every
/// triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    subject: Option<Subject>,
    predicate: Option<Iri>,
    object: Option<Term>,
}

impl TriplePattern {
    /// The all-wildcard pattern.
    pub fn any() -> Self {
        Self::default()
    }

    /// Bind the subject field.
    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Bind the predicate field.
    pub fn with_predicate(mut self, predicate: Iri) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Bind the object field.
    pub fn with_object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// The bound subject, if any.
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// The bound predicate, if any.
    pub fn predicate(&self) -> Option<&Iri> {
        self.predicate.as_ref()
    }

    /// The bound object, if any.
    pub fn object(&self) -> Option<&Term> {
        self.object.as_ref()
    }

    /// Whether a triple satisfies every bound field of this pattern.
    ///
    /// This is the brute-force check; the planner exists so that queries
    /// rarely need to apply it to the whole graph.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject
            .as_ref()
            .map_or(true, |s| s == triple.subject())
            && self
                .predicate
                .as_ref()
                .map_or(true, |p| p == triple.predicate())
            && self.object.as_ref().map_or(true, |o| o == triple.object())
    }
}
