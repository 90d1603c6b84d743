//! Index structures for fast lookup. One index per triple field role, all
//! kept in lock-step with the canonical set by the owning graph.

pub mod field_index;

pub use field_index::FieldIndex;
