//! All data types for the indexed-graph library.

pub mod error;
pub mod term;
pub mod triple;

pub use error::{GraphError, GraphResult};
pub use term::{BlankNode, Iri, Literal, Subject, Term};
pub use triple::{Triple, TriplePattern};
