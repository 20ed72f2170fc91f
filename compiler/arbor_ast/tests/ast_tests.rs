use arbor_ast::visit::{count_nodes, to_sexpr};
use arbor_ast::{AstError, NodeArena, NodeId};
use arbor_lexer::{Token, Tokenizer};
use pretty_assertions::assert_eq;

/// Push every token of `source` onto a fresh arena
fn flat_chain(source: &str, capacity: usize) -> Result<(NodeArena<'_>, Option<NodeId>), AstError> {
    let mut arena = NodeArena::with_capacity(capacity);
    for token in Tokenizer::arithmetic(source) {
        arena.push(token)?;
    }
    let head = arena.head();
    Ok((arena, head))
}

#[test]
fn test_flat_chain_dump() -> Result<(), Box<dyn std::error::Error>> {
    let (arena, head) = flat_chain("55 + 2 * 3", 16)?;
    let head = head.ok_or("no tokens")?;

    let expected = "\
Number :: '55'
Add :: '+'
Number :: '2'
Multiply :: '*'
Number :: '3'
";
    assert_eq!(arena.dump(head), expected);
    assert_eq!(count_nodes(&arena, head), 5);
    Ok(())
}

#[test]
fn test_exhaustion_is_typed() {
    let err = flat_chain("1 + 2 + 3", 4).map(|_| ()).unwrap_err();
    assert_eq!(err, AstError::StorageExhausted { capacity: 4 });
    assert_eq!(err.to_string(), "node storage exhausted: capacity is 4 nodes");
}

#[test]
fn test_manual_fold_relinks_without_copying() {
    let (mut arena, head) = flat_chain("abs 7", 4).unwrap();
    let op = head.unwrap();
    let operand = arena.sibling(op).unwrap();

    arena.set_sibling(op, arena.sibling(operand));
    arena.set_sibling(operand, None);
    arena.adopt(op, operand);

    assert_eq!(arena.len(), 2);
    assert_eq!(arena.siblings(op).count(), 1);
    assert_eq!(to_sexpr(&arena, op), "(abs 7)");
    let token: &Token = arena.token(operand);
    assert_eq!(token.lexeme(), "7");
}

#[cfg(feature = "serde")]
#[test]
fn test_node_serializes_with_links() {
    let (arena, head) = flat_chain("1 + 2", 4).unwrap();
    let json = arbor_ast::to_json(&arena[head.unwrap()]).unwrap();
    assert!(json.contains(r#""kind": "Number""#), "{json}");
    assert!(json.contains(r#""next_sibling": 1"#), "{json}");
    assert!(json.contains(r#""first_child": null"#), "{json}");
}
