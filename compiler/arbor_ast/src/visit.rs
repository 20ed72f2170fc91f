//! Traversal over arena trees.
//!
//! Walks are lazy iterators that borrow the arena; they never touch the
//! folding algorithm and can be restarted at any time.

use std::fmt;

use crate::arena::{Node, NodeArena, NodeId};

/// Iterator over a node and the siblings that follow it.
#[derive(Debug, Clone)]
pub struct Siblings<'t, 'a> {
    arena: &'t NodeArena<'a>,
    next: Option<NodeId>,
}

impl<'t, 'a> Siblings<'t, 'a> {
    pub(crate) fn new(arena: &'t NodeArena<'a>, start: Option<NodeId>) -> Self {
        Self { arena, next: start }
    }
}

impl Iterator for Siblings<'_, '_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.arena.sibling(id);
        Some(id)
    }
}

/// One step of a [`DepthFirst`] walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'t, 'a> {
    /// The visited node
    pub id: NodeId,
    /// Distance from the level the walk started on
    pub depth: usize,
    /// The node itself
    pub node: &'t Node<'a>,
}

/// Pre-order walk: a node, then its children (recursively), then its next
/// sibling.
#[derive(Debug, Clone)]
pub struct DepthFirst<'t, 'a> {
    arena: &'t NodeArena<'a>,
    start: NodeId,
    stack: Vec<(NodeId, usize)>,
}

impl<'t, 'a> DepthFirst<'t, 'a> {
    pub(crate) fn new(arena: &'t NodeArena<'a>, start: NodeId) -> Self {
        Self {
            arena,
            start,
            stack: vec![(start, 0)],
        }
    }

    /// Start the walk over from its first node
    pub fn restart(&mut self) {
        self.stack.clear();
        self.stack.push((self.start, 0));
    }
}

impl<'t, 'a> Iterator for DepthFirst<'t, 'a> {
    type Item = Visit<'t, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.arena[id];
        // Sibling goes under the child so the subtree is finished first
        if let Some(sibling) = node.next_sibling() {
            self.stack.push((sibling, depth));
        }
        if let Some(child) = node.first_child() {
            self.stack.push((child, depth + 1));
        }
        Some(Visit { id, depth, node })
    }
}

/// Write one line per node of the walk from `start`, indented two spaces
/// per level.
pub fn write_tree<W: fmt::Write>(out: &mut W, arena: &NodeArena<'_>, start: NodeId) -> fmt::Result {
    for visit in arena.depth_first(start) {
        writeln!(out, "{:indent$}{}", "", visit.node.token(), indent = 2 * visit.depth)?;
    }
    Ok(())
}

impl NodeArena<'_> {
    /// Render the walk from `start` as text, one token per line
    pub fn dump(&self, start: NodeId) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_tree(&mut out, self, start);
        out
    }
}

/// Count the nodes reachable from `start` (siblings included)
pub fn count_nodes(arena: &NodeArena<'_>, start: NodeId) -> usize {
    arena.depth_first(start).count()
}

/// Depth of the deepest node reachable from `start`, the start level being 0
pub fn max_depth(arena: &NodeArena<'_>, start: NodeId) -> usize {
    arena
        .depth_first(start)
        .map(|visit| visit.depth)
        .max()
        .unwrap_or(0)
}

/// Render a subtree in prefix notation, e.g. `(+ 1 (* 2 3))`.
pub fn to_sexpr(arena: &NodeArena<'_>, id: NodeId) -> String {
    enum Step {
        Open(NodeId),
        Close,
    }

    let mut out = String::new();
    let mut stack = vec![Step::Open(id)];
    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Open(id) => id,
            Step::Close => {
                out.push(')');
                continue;
            }
        };
        if !out.is_empty() {
            out.push(' ');
        }
        let lexeme = arena.token(id).lexeme();
        if arena.first_child(id).is_none() {
            out.push_str(lexeme);
            continue;
        }
        out.push('(');
        out.push_str(lexeme);
        stack.push(Step::Close);
        let start = stack.len();
        stack.extend(arena.children(id).map(Step::Open));
        // Children come off the stack left to right
        stack[start..].reverse();
    }
    out
}
