//! indexed-graph — in-memory RDF triple collection with per-field indexes.
//!
//! Stores (subject, predicate, object) statements in a canonical set with one
//! derived index per field role, answering the 8 bound/wildcard pattern
//! combinations with at most one index probe. Query results are delivered
//! through detached cursors that support in-place removal and fail fast on
//! unsynchronized structural mutation.

pub mod graph;
pub mod index;
pub mod query;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::IndexedGraph;
pub use index::FieldIndex;
pub use query::{plan, Probe, QueryPlan, Residual, TripleCursor};
pub use types::{
    BlankNode, GraphError, GraphResult, Iri, Literal, Subject, Term, Triple, TriplePattern,
};
