//! Precedence folding over a sibling chain.
//!
//! The builder makes one left-to-right pass over the top-level chain per
//! precedence tier, tightest tier first. Each recognized pattern is folded in
//! place: the operator node adopts its operands as children and takes their
//! place in the chain. No node is allocated; only links change.

use arbor_ast::{NodeArena, NodeId};
use log::{debug, trace};

use crate::error::{Malformed, Offender, Result};
use crate::precedence::{Fixity, Level, Precedence};

/// Outcome of one successful fold
struct Fold {
    /// The operator node that now owns the operands
    parent: NodeId,
    /// Nodes that left the top-level chain
    consumed: Vec<NodeId>,
}

/// Turns a flat sibling chain into a precedence-shaped tree.
///
/// Holds no state across calls; the same builder can fold any number of
/// chains.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'p> {
    precedence: &'p Precedence,
}

impl<'p> TreeBuilder<'p> {
    /// Create a builder for a precedence table
    pub fn new(precedence: &'p Precedence) -> Self {
        Self { precedence }
    }

    /// Fold the chain starting at `head` and return the root of the tree.
    ///
    /// Every node of the chain must still be a leaf.
    pub fn build(&self, arena: &mut NodeArena<'_>, head: NodeId) -> Result<NodeId> {
        let mut root = head;

        for (rank, level) in self.precedence.levels().iter().enumerate().rev() {
            debug!("folding tier {rank}: {:?} {}", level.fixity, level.kind);
            root = self.fold_level(arena, root, level)?;
        }

        self.finish(arena, root)
    }

    /// One pass over the chain for a single tier
    fn fold_level(
        &self,
        arena: &mut NodeArena<'_>,
        mut root: NodeId,
        level: &Level,
    ) -> Result<NodeId> {
        let mut previous: Option<NodeId> = None;
        let mut current = Some(root);

        while let Some(node) = current {
            trace!("at {} ({})", node, arena.token(node));
            let fold = match level.fixity {
                Fixity::Infix => self.fold_infix(arena, node, level)?,
                Fixity::Prefix => self.fold_prefix(arena, node, level)?,
            };

            match fold {
                Some(Fold { parent, consumed }) => {
                    if let Some(previous) = previous {
                        arena.set_sibling(previous, Some(parent));
                    }
                    if consumed.contains(&root) {
                        root = parent;
                    }
                    debug!("folded {} ({})", parent, arena.token(parent));
                    // The new parent is examined again: `a+b+c` chains
                    current = Some(parent);
                }
                None => {
                    previous = Some(node);
                    current = arena.sibling(node);
                }
            }
        }

        Ok(root)
    }

    /// Fold `current op rhs` when `op` is a bare infix operator of `level`
    fn fold_infix(
        &self,
        arena: &mut NodeArena<'_>,
        current: NodeId,
        level: &Level,
    ) -> Result<Option<Fold>> {
        if is_bare(arena, current, level) {
            return Err(Malformed::MissingLeftOperand(offender(arena, current)).into());
        }

        let Some(op) = arena.sibling(current) else {
            return Ok(None);
        };
        if !is_bare(arena, op, level) {
            return Ok(None);
        }

        if !self.is_operand(arena, current) {
            return Err(Malformed::AdjacentOperators(offender(arena, op)).into());
        }

        let Some(rhs) = arena.sibling(op) else {
            return Err(Malformed::MissingOperand(offender(arena, op)).into());
        };
        if !self.is_operand(arena, rhs) {
            return Err(Malformed::AdjacentOperators(offender(arena, rhs)).into());
        }

        // Children chain becomes `current -> rhs`; `op` takes their place
        let after = arena.sibling(rhs);
        arena.adopt(op, current);
        arena.set_sibling(current, Some(rhs));
        arena.set_sibling(rhs, None);
        arena.set_sibling(op, after);

        Ok(Some(Fold {
            parent: op,
            consumed: vec![current, rhs],
        }))
    }

    /// Fold a run of bare prefix operators of `level` onto the operand after
    /// the run, innermost first
    fn fold_prefix(
        &self,
        arena: &mut NodeArena<'_>,
        current: NodeId,
        level: &Level,
    ) -> Result<Option<Fold>> {
        if !is_bare(arena, current, level) {
            return Ok(None);
        }

        let mut run = vec![current];
        let mut next = arena.sibling(current);
        while let Some(candidate) = next.filter(|&id| is_bare(arena, id, level)) {
            run.push(candidate);
            next = arena.sibling(candidate);
        }

        let Some(operand) = next else {
            let last = run[run.len() - 1];
            return Err(Malformed::MissingOperand(offender(arena, last)).into());
        };
        if !self.is_operand(arena, operand) {
            return Err(Malformed::AdjacentOperators(offender(arena, operand)).into());
        }

        for &op in run.iter().rev() {
            if let Some(child) = arena.sibling(op) {
                let after = arena.sibling(child);
                arena.adopt(op, child);
                arena.set_sibling(child, None);
                arena.set_sibling(op, after);
            }
        }

        let mut consumed = run.split_off(1);
        consumed.push(operand);
        Ok(Some(Fold {
            parent: current,
            consumed,
        }))
    }

    /// After the last tier exactly one operand must remain
    fn finish(&self, arena: &NodeArena<'_>, root: NodeId) -> Result<NodeId> {
        if let Some(extra) = arena.sibling(root) {
            let first = leftmost(arena, extra);
            return Err(Malformed::DanglingOperand(offender(arena, first)).into());
        }
        if !self.is_operand(arena, root) {
            return Err(Malformed::MissingOperand(offender(arena, root)).into());
        }
        Ok(root)
    }

    /// A value: a folded operator, or any token the table does not fold
    fn is_operand(&self, arena: &NodeArena<'_>, id: NodeId) -> bool {
        arena.first_child(id).is_some() || !self.precedence.is_operator(arena.token(id).kind)
    }
}

/// An operator of `level` that has not been folded yet
fn is_bare(arena: &NodeArena<'_>, id: NodeId, level: &Level) -> bool {
    arena.token(id).kind == level.kind && arena.first_child(id).is_none()
}

/// The first token, in source order, of the subtree at `id`
fn leftmost(arena: &NodeArena<'_>, mut id: NodeId) -> NodeId {
    while let Some(child) = arena.first_child(id) {
        // A prefix operator precedes its operand in the source
        if arena.token(id).location.offset < arena.token(child).location.offset {
            break;
        }
        id = child;
    }
    id
}

fn offender(arena: &NodeArena<'_>, id: NodeId) -> Offender {
    Offender::from(arena.token(id))
}
