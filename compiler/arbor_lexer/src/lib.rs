//! Arbor lexical analyzer
//!
//! This crate turns a borrowed source buffer into classified tokens, one at a
//! time. The [`Tokenizer`] owns the scanning position and delegates the
//! recognition of token shapes to a [`Scanner`], so the same character-level
//! machinery can serve different grammars.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod logos_token;
pub mod scanner;
pub mod token;
pub mod tokenizer;

// Re-export the main types for convenience
pub use cursor::{Cursor, CursorState};
pub use logos_token::{LogosScanner, LogosToken};
pub use scanner::ArithmeticScanner;
pub use token::{Location, Token, TokenKind};
pub use tokenizer::{Scanner, Tokenizer};
