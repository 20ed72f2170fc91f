//! Prints trees for a handful of expressions; run with `--nocapture` to see
//! them.

use arbor_ast::visit::{count_nodes, max_depth};
use arbor_parser::parse;
use tests::{assert_tree_shape, tree_json};

const SAMPLES: [&str; 4] = [
    "abs 55 + 2 ** 3 * 4",
    "1 + 2 + 3",
    "neg sqrt 16 * 2",
    "7",
];

#[test]
fn print_sample_trees() {
    for source in SAMPLES {
        let ast = parse(source).unwrap();
        assert_tree_shape(&ast);
        println!("{source}\n{}", ast.dump());

        let nodes = count_nodes(ast.arena(), ast.root());
        assert_eq!(nodes, ast.arena().len());
        assert!(max_depth(ast.arena(), ast.root()) < nodes);
    }
}

#[test]
fn print_sample_json() {
    let ast = parse(SAMPLES[0]).unwrap();
    let value = tree_json(&ast).unwrap();
    println!("{value:#}");
    assert_eq!(value["kind"], "Add");
    assert_eq!(value["children"][0]["children"][0]["text"], "55");
}
