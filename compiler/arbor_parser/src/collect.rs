//! Token collection into node storage

use arbor_ast::{NodeArena, NodeId};
use arbor_lexer::{Scanner, TokenKind, Tokenizer};
use log::{debug, warn};

use crate::error::{Offender, ParseError, Result};

/// Drain `tokenizer` into `arena` as a flat sibling chain and return its
/// head.
///
/// Collection stops at the first unknown token; nothing after it is stored.
/// The chain is linked independently of anything already in the arena.
pub fn collect_tokens<'a, S>(
    tokenizer: &mut Tokenizer<'a, S>,
    arena: &mut NodeArena<'a>,
) -> Result<NodeId>
where
    S: Scanner<'a>,
{
    let mut head = None;
    let mut tail: Option<NodeId> = None;
    let mut collected = 0usize;

    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::EndOfInput => break,
            TokenKind::Unknown => {
                warn!("unknown token {} at {}", token, token.location);
                return Err(ParseError::Lexical(Offender::from(&token)));
            }
            _ => {
                let id = arena.alloc(token)?;
                match tail {
                    Some(tail) => arena.set_sibling(tail, Some(id)),
                    None => head = Some(id),
                }
                tail = Some(id);
                collected += 1;
            }
        }
    }

    debug!("collected {collected} tokens");
    head.ok_or(ParseError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collects_flat_chain() {
        let mut tokenizer = Tokenizer::arithmetic("1 + 2");
        let mut arena = NodeArena::new();
        let head = collect_tokens(&mut tokenizer, &mut arena).unwrap();
        let texts: Vec<_> = arena
            .siblings(head)
            .map(|id| arena.token(id).lexeme())
            .collect();
        assert_eq!(texts, vec!["1", "+", "2"]);
    }

    #[test]
    fn test_whitespace_is_empty_input() {
        let mut tokenizer = Tokenizer::arithmetic("   \n\t");
        let mut arena = NodeArena::new();
        let err = collect_tokens(&mut tokenizer, &mut arena).unwrap_err();
        assert_eq!(err, ParseError::EmptyInput);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_unknown_stops_collection() {
        let mut tokenizer = Tokenizer::arithmetic("1 + # 2 + 3");
        let mut arena = NodeArena::new();
        let err = collect_tokens(&mut tokenizer, &mut arena).unwrap_err();
        match err {
            ParseError::Lexical(at) => {
                assert_eq!(at.text, "#");
                assert_eq!(at.location.column, 5);
            }
            other => panic!("Expected a lexical error, got {other:?}"),
        }
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut tokenizer = Tokenizer::arithmetic("1 + 2 + 3");
        let mut arena = NodeArena::with_capacity(3);
        let err = collect_tokens(&mut tokenizer, &mut arena).unwrap_err();
        assert_eq!(err, ParseError::StorageExhausted { capacity: 3 });
    }
}
