//! Nested JSON view of arena trees.

use serde::ser::{self, Serialize, SerializeStruct, Serializer};

use crate::arena::{NodeArena, NodeId, DEFAULT_CAPACITY};
use crate::visit::max_depth;

/// Deepest subtree [`Subtree`] agrees to serialize, in node levels.
pub const MAX_SERIALIZE_DEPTH: usize = DEFAULT_CAPACITY;

/// A node and everything below it, serialized as
/// `{"kind", "text", "location", "children": [...]}`.
///
/// Serialization recurses once per level, so subtrees deeper than
/// [`MAX_SERIALIZE_DEPTH`] are rejected with a serializer error.
#[derive(Debug, Clone, Copy)]
pub struct Subtree<'t, 'a> {
    arena: &'t NodeArena<'a>,
    id: NodeId,
}

impl<'t, 'a> Subtree<'t, 'a> {
    /// View the subtree rooted at `id`
    pub fn new(arena: &'t NodeArena<'a>, id: NodeId) -> Self {
        Self { arena, id }
    }

    /// Number of node levels, 1 for a leaf
    pub fn depth(&self) -> usize {
        match self.arena.first_child(self.id) {
            Some(child) => 2 + max_depth(self.arena, child),
            None => 1,
        }
    }
}

impl Serialize for Subtree<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let depth = self.depth();
        if depth > MAX_SERIALIZE_DEPTH {
            return Err(ser::Error::custom(format!(
                "tree is {depth} levels deep, at most {MAX_SERIALIZE_DEPTH} can be serialized"
            )));
        }
        Level(*self).serialize(serializer)
    }
}

/// One level of a [`Subtree`] whose depth was already checked
struct Level<'t, 'a>(Subtree<'t, 'a>);

struct Children<'t, 'a>(Subtree<'t, 'a>);

impl Serialize for Children<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Subtree { arena, id } = self.0;
        serializer.collect_seq(
            arena
                .children(id)
                .map(|child| Level(Subtree::new(arena, child))),
        )
    }
}

impl Serialize for Level<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Subtree { arena, id } = self.0;
        let token = arena.token(id);
        let mut state = serializer.serialize_struct("Subtree", 4)?;
        state.serialize_field("kind", &token.kind)?;
        state.serialize_field("text", &token.text)?;
        state.serialize_field("location", &token.location)?;
        state.serialize_field("children", &Children(self.0))?;
        state.end()
    }
}

/// Serializes a value to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_lexer::{Location, Token, TokenKind};
    use serde_json::json;

    #[test]
    fn test_subtree_json() {
        let mut arena = NodeArena::new();
        let at = Location::default();
        let op = arena.alloc(Token::new(TokenKind::UnaryPrefix, "abs", at)).unwrap();
        let operand = arena.alloc(Token::new(TokenKind::Number, "55", at)).unwrap();
        arena.adopt(op, operand);

        let value = serde_json::to_value(Subtree::new(&arena, op)).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "UnaryPrefix",
                "text": "abs",
                "location": {"line": 1, "column": 1, "offset": 0},
                "children": [{
                    "kind": "Number",
                    "text": "55",
                    "location": {"line": 1, "column": 1, "offset": 0},
                    "children": []
                }]
            })
        );

        let pretty = to_json(&Subtree::new(&arena, op)).unwrap();
        assert!(pretty.contains(r#""kind": "UnaryPrefix""#));
    }

    #[test]
    fn test_too_deep_subtree_is_an_error() {
        let levels = MAX_SERIALIZE_DEPTH + 1;
        let mut arena = NodeArena::with_capacity(levels);
        let at = Location::default();
        let mut inner = arena.alloc(Token::new(TokenKind::Number, "1", at)).unwrap();
        for _ in 1..levels {
            let op = arena.alloc(Token::new(TokenKind::UnaryPrefix, "f", at)).unwrap();
            arena.adopt(op, inner);
            inner = op;
        }

        assert_eq!(Subtree::new(&arena, inner).depth(), levels);
        let err = to_json(&Subtree::new(&arena, inner)).unwrap_err();
        assert!(err.to_string().contains("levels deep"), "{err}");

        // One level less still serializes
        let child = arena.first_child(inner).unwrap();
        assert!(to_json(&Subtree::new(&arena, child)).is_ok());
    }
}
