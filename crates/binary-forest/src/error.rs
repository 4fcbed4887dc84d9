use thiserror::Error;

use crate::traverse::TraversalOrder;

/// Errors produced by tree operations.
///
/// A failed `search`, `insert` or `delete` leaves the tree exactly as it was,
/// so none of these are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Insert of a key that is already present. Values are never overwritten.
    #[error("key already exists")]
    DuplicateKey,
    /// Search or delete of an absent key.
    #[error("key does not exist")]
    KeyNotFound,
    /// A rotation or fix-up step met a node shape that a valid tree cannot
    /// have. The tree invariant is already broken when this is returned.
    #[error("invalid rotation state")]
    InvalidRotationState,
    #[error("{0} traversal is not supported by this tree")]
    UnsupportedTraversal(TraversalOrder),
    #[error("invalid traversal order: {0:?}")]
    InvalidTraversal(String),
}
