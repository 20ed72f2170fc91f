//! Shared helpers for the end-to-end tests.

use arbor_ast::{NodeId, Subtree};
use arbor_lexer::{LogosScanner, TokenKind, Tokenizer};
use arbor_parser::{parse_tokens, Ast, ParseOptions, Precedence};

/// Parse with the logos-backed scanner and default settings
pub fn parse_logos(source: &str) -> arbor_parser::Result<Ast<'_>> {
    parse_tokens(
        Tokenizer::new(source, LogosScanner),
        &ParseOptions::default(),
        &Precedence::default(),
    )
}

/// The whole tree as a JSON value
pub fn tree_json(ast: &Ast<'_>) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(Subtree::new(ast.arena(), ast.root()))
}

/// Check that every node is reached exactly once from the root and that
/// each operator owns the number of operands its kind takes.
pub fn assert_tree_shape(ast: &Ast<'_>) {
    let arena = ast.arena();
    let mut seen: Vec<NodeId> = ast
        .depth_first()
        .take(arena.len() + 1)
        .map(|visit| visit.id)
        .collect();
    assert_eq!(seen.len(), arena.len(), "walk from the root revisits nodes");
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), arena.len(), "a node is reachable twice");

    for id in seen {
        let expected = match arena.token(id).kind {
            TokenKind::Add | TokenKind::Multiply | TokenKind::Power => 2,
            TokenKind::UnaryPrefix => 1,
            _ => 0,
        };
        assert_eq!(arena.children(id).count(), expected, "children of {}", arena.token(id));
    }
}
