//! Table-driven scanner for the arithmetic grammar using the 'logos' crate
//!
//! [`LogosScanner`] recognizes exactly the same tokens as
//! [`ArithmeticScanner`](crate::ArithmeticScanner), but lets a generated DFA
//! find the lexeme boundary. The cursor is still advanced character by
//! character afterwards, so line and column tracking stays identical.

use logos::Logos;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Scanner;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // --- Operators (multi-char first) ---
    #[token("**")]
    DoubleStar,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,

    // --- Operands and prefix operators ---
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::DoubleStar => TokenKind::Power,
            LogosToken::Star => TokenKind::Multiply,
            LogosToken::Plus => TokenKind::Add,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Identifier => TokenKind::UnaryPrefix,
        }
    }
}

/// Arithmetic scanner backed by [`LogosToken`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogosScanner;

impl<'a> Scanner<'a> for LogosScanner {
    fn scan(&mut self, cursor: &mut Cursor<'a>) -> Token<'a> {
        cursor.skip_whitespace();

        let start = cursor.location();
        let mut inner = LogosToken::lexer(cursor.rest());
        let kind = match inner.next() {
            None => return cursor.end_of_input(),
            Some(Ok(token)) => {
                let span = inner.span();
                debug_assert_eq!(span.start, 0, "whitespace is skipped before lexing");
                cursor.advance_bytes(span.end);
                TokenKind::from(token)
            }
            Some(Err(())) => {
                // One character, however much logos rejected
                cursor.next_char();
                TokenKind::Unknown
            }
        };

        cursor.token(kind, start)
    }
}
