//! Error types for the indexed-graph library.

use thiserror::Error;

/// All errors that can occur in the indexed-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The graph was structurally mutated while a cursor was open.
    #[error("graph modified during iteration: cursor expected version {expected}, graph is at {found}")]
    ConcurrentModification { expected: u64, found: u64 },

    /// `remove_current` called outside the delivered state.
    #[error("remove_current is only valid immediately after a successful next")]
    InvalidCursorState,

    /// IRI string failed validation.
    #[error("invalid IRI: {0:?}")]
    InvalidIri(String),

    /// Language tag failed validation.
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),
}

/// Convenience result type for indexed-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
