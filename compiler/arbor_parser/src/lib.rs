//! Precedence folding for Arbor expressions.
//!
//! Tokens are collected into a [`NodeArena`] as a flat sibling chain, then
//! [`TreeBuilder`] rewrites that chain in place into a tree, one precedence
//! tier at a time, tightest tier first.
//!
//! ```
//! let ast = arbor_parser::parse("abs 55 + 2 ** 3 * 4").unwrap();
//! assert_eq!(ast.to_sexpr(), "(+ (abs 55) (* (** 2 3) 4))");
//! ```

pub mod builder;
pub mod collect;
pub mod error;
pub mod precedence;

use arbor_ast::visit::{self, DepthFirst};
use arbor_ast::{ArenaConfig, NodeArena, NodeId};
use arbor_lexer::{Scanner, Tokenizer};
use log::debug;

pub use builder::TreeBuilder;
pub use collect::collect_tokens;
pub use error::{Malformed, Offender, ParseError, Result};
pub use precedence::{Fixity, Level, Precedence, ARITHMETIC};

/// Options for the one-call parse functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Node storage limits
    pub arena: ArenaConfig,
    /// Count the tokens first and size storage to fit exactly
    pub presize: bool,
}

/// A built tree together with the storage it lives in
#[derive(Debug, Clone)]
pub struct Ast<'a> {
    arena: NodeArena<'a>,
    root: NodeId,
}

impl<'a> Ast<'a> {
    /// The top of the tree
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The storage holding every node
    pub fn arena(&self) -> &NodeArena<'a> {
        &self.arena
    }

    /// Pre-order walk from the root
    pub fn depth_first(&self) -> DepthFirst<'_, 'a> {
        self.arena.depth_first(self.root)
    }

    /// One line per node, indented by depth
    pub fn dump(&self) -> String {
        self.arena.dump(self.root)
    }

    /// The tree in prefix notation
    pub fn to_sexpr(&self) -> String {
        visit::to_sexpr(&self.arena, self.root)
    }

    /// Split into storage and root
    pub fn into_parts(self) -> (NodeArena<'a>, NodeId) {
        (self.arena, self.root)
    }
}

/// Parse an arithmetic expression with the default table and storage
pub fn parse(source: &str) -> Result<Ast<'_>> {
    parse_with(source, &ParseOptions::default(), &Precedence::default())
}

/// Parse an arithmetic expression with explicit options and table
pub fn parse_with<'a>(
    source: &'a str,
    options: &ParseOptions,
    precedence: &Precedence,
) -> Result<Ast<'a>> {
    parse_tokens(Tokenizer::arithmetic(source), options, precedence)
}

/// Collect and fold everything `tokenizer` produces
pub fn parse_tokens<'a, S>(
    mut tokenizer: Tokenizer<'a, S>,
    options: &ParseOptions,
    precedence: &Precedence,
) -> Result<Ast<'a>>
where
    S: Scanner<'a>,
{
    let mut config = options.arena;
    if options.presize {
        let count = tokenizer.count_tokens();
        if count > config.capacity {
            return Err(ParseError::StorageExhausted {
                capacity: config.capacity,
            });
        }
        debug!("presizing node storage for {count} tokens");
        config.capacity = count;
    }

    let mut arena = NodeArena::with_config(config);
    let head = collect_tokens(&mut tokenizer, &mut arena)?;
    let root = TreeBuilder::new(precedence).build(&mut arena, head)?;
    Ok(Ast { arena, root })
}
