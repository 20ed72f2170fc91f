//! Node storage addressed by stable indices.
//!
//! Every [`Node`] lives in a [`NodeArena`] and refers to its next sibling and
//! first child by [`NodeId`]. Relinking a node never copies it, so a node is
//! always in exactly one place: the top-level chain, or under one parent.

use std::fmt;
use std::ops::Index;

use arbor_lexer::Token;

use crate::visit::{DepthFirst, Siblings};
use crate::{AstError, Result};

/// Default number of nodes an arena accepts.
pub const DEFAULT_CAPACITY: usize = 256;

/// Handle to a node inside the arena that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in allocation order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree vertex: one token plus its structural links.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node<'a> {
    token: Token<'a>,
    next_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
}

impl<'a> Node<'a> {
    /// The token this node represents
    pub fn token(&self) -> &Token<'a> {
        &self.token
    }

    /// The node after this one at the same level
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// The first node of this node's subtree
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// Returns true if nothing has been folded under this node
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}

/// Configuration for node storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of nodes the arena accepts
    pub capacity: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Capacity-bounded storage for the nodes of one parse.
#[derive(Debug, Clone, Default)]
pub struct NodeArena<'a> {
    nodes: Vec<Node<'a>>,
    config: ArenaConfig,
    /// First node appended with [`push`](Self::push)
    head: Option<NodeId>,
    /// Last node appended with [`push`](Self::push)
    tail: Option<NodeId>,
}

impl<'a> NodeArena<'a> {
    /// Create an arena with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena accepting at most `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArenaConfig { capacity })
    }

    /// Create an arena from a configuration
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.capacity.min(DEFAULT_CAPACITY)),
            config,
            head: None,
            tail: None,
        }
    }

    /// Allocate a node that is linked to nothing.
    pub fn alloc(&mut self, token: Token<'a>) -> Result<NodeId> {
        if self.nodes.len() >= self.config.capacity {
            return Err(AstError::StorageExhausted {
                capacity: self.config.capacity,
            });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            token,
            next_sibling: None,
            first_child: None,
        });
        Ok(id)
    }

    /// Allocate a node and append it to the flat sibling chain.
    ///
    /// The chain starts at the first pushed node; see [`head`](Self::head).
    pub fn push(&mut self, token: Token<'a>) -> Result<NodeId> {
        let id = self.alloc(token)?;
        match self.tail {
            Some(tail) => self.nodes[tail.0].next_sibling = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        Ok(id)
    }

    /// Drop every node, keeping the allocation and configuration
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// The first node appended with [`push`](Self::push)
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Borrow a node
    pub fn get(&self, id: NodeId) -> Option<&Node<'a>> {
        self.nodes.get(id.0)
    }

    /// The token stored at `id`
    pub fn token(&self, id: NodeId) -> &Token<'a> {
        &self[id].token
    }

    /// The node after `id` at the same level
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        self[id].next_sibling
    }

    /// The first child of `id`
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self[id].first_child
    }

    /// Relink the sibling edge of `id`
    pub fn set_sibling(&mut self, id: NodeId, sibling: Option<NodeId>) {
        self.nodes[id.0].next_sibling = sibling;
    }

    /// Make `child` (and the sibling chain hanging off it) the subtree of
    /// `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` already owns children; a node is folded at most
    /// once.
    pub fn adopt(&mut self, parent: NodeId, child: NodeId) {
        let slot = &mut self.nodes[parent.0].first_child;
        assert!(
            slot.is_none(),
            "node {parent} already owns children, refusing to fold {child} under it"
        );
        *slot = Some(child);
    }

    /// Iterate `id` and every sibling after it
    pub fn siblings(&self, id: NodeId) -> Siblings<'_, 'a> {
        Siblings::new(self, Some(id))
    }

    /// Iterate the direct children of `id`
    pub fn children(&self, id: NodeId) -> Siblings<'_, 'a> {
        Siblings::new(self, self[id].first_child)
    }

    /// Pre-order walk starting at `start`: a node, its subtree, then its
    /// next sibling.
    pub fn depth_first(&self, start: NodeId) -> DepthFirst<'_, 'a> {
        DepthFirst::new(self, start)
    }

    /// Number of allocated nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been allocated
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum number of nodes
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// How many more nodes fit
    pub fn remaining(&self) -> usize {
        self.config.capacity - self.nodes.len()
    }

    /// All nodes in allocation order
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }
}

impl<'a> Index<NodeId> for NodeArena<'a> {
    type Output = Node<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
