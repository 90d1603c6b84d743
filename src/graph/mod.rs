//! The indexed triple collection — the core data structure.

pub mod indexed_graph;

pub use indexed_graph::IndexedGraph;
