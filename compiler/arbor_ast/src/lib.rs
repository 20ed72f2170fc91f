//! Node arena and traversal for Arbor expression trees.
//!
//! Tokens are stored as [`Node`]s in a capacity-bounded [`NodeArena`] and
//! linked by index: each node knows its next sibling and its first child.
//! The parser folds a flat sibling chain into a tree by relinking these
//! edges; this crate owns the storage and the ways to walk and print it.

pub mod arena;
#[cfg(feature = "serde")]
pub mod serialize;
pub mod visit;

// Re-export commonly used types
pub use arena::{ArenaConfig, Node, NodeArena, NodeId, DEFAULT_CAPACITY};
#[cfg(feature = "serde")]
pub use serialize::{to_json, Subtree, MAX_SERIALIZE_DEPTH};
pub use visit::{DepthFirst, Siblings, Visit};

/// Errors raised by node storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// More nodes were requested than the arena was sized for.
    #[error("node storage exhausted: capacity is {capacity} nodes")]
    StorageExhausted {
        /// The configured capacity
        capacity: usize,
    },
}

/// A result type for arena operations.
pub type Result<T> = std::result::Result<T, AstError>;
