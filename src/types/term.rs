//! RDF term model — IRIs, blank nodes, literals, and the position enums.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::types::error::{GraphError, GraphResult};

/// An IRI reference identifying a resource.
///
/// Validation is deliberately light: the string must be non-empty and free of
/// whitespace. Full IRI grammar checking is a parser concern, not a store
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Iri(String);

impl Iri {
    /// Create a new IRI, rejecting empty or whitespace-containing strings.
    pub fn new(iri: impl Into<String>) -> GraphResult<Self> {
        let iri = iri.into();
        if iri.is_empty() || iri.chars().any(char::is_whitespace) {
            return Err(GraphError::InvalidIri(iri));
        }
        Ok(Self(iri))
    }

    /// The IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// Counter backing `BlankNode::new` — labels are unique per process.
static NEXT_BLANK_ID: AtomicU64 = AtomicU64::new(0);

/// An anonymous node, identified by label.
///
/// Two blank nodes with the same label are the same node (structural
/// equality, like every other term).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlankNode(String);

impl BlankNode {
    /// Create a blank node with a fresh, process-unique label.
    pub fn new() -> Self {
        let id = NEXT_BLANK_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("b{id}"))
    }

    /// Create a blank node with a caller-supplied label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The node's label (without the `_:` prefix).
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal value — plain, typed, or language-tagged.
///
/// A literal carries at most one of `datatype` and `language`; the
/// constructors make the invalid combination unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Literal {
    value: String,
    datatype: Option<Iri>,
    language: Option<String>,
}

impl Literal {
    /// Create a plain literal.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal.
    pub fn typed(value: impl Into<String>, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal. The tag must be non-empty ASCII
    /// alphanumerics and hyphens (e.g. `en`, `de-AT`).
    pub fn lang(value: impl Into<String>, tag: impl Into<String>) -> GraphResult<Self> {
        let tag = tag.into();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(GraphError::InvalidLanguageTag(tag));
        }
        Ok(Self {
            value: value.into(),
            datatype: None,
            language: Some(tag),
        })
    }

    /// The lexical value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI, if this is a typed literal.
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// The language tag, if this is a language-tagged literal.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)?;
        if let Some(lang) = &self.language {
            write!(f, "@{lang}")?;
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^{dt}")?;
        }
        Ok(())
    }
}

/// A term valid in subject position: an IRI or a blank node, never a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Subject {
    Iri(Iri),
    Blank(BlankNode),
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::Blank(node)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Iri(iri) => iri.fmt(f),
            Subject::Blank(node) => node.fmt(f),
        }
    }
}

/// A term valid in object position: any term at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Subject> for Term {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::Blank(node) => Term::Blank(node),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Blank(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}
