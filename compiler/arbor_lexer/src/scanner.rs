//! The hand-written scanner for the arithmetic grammar

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Scanner;

/// Scans numbers, `+`, `*`, `**` and identifiers used as prefix operators.
///
/// Leading whitespace is skipped. Any character outside the grammar becomes
/// a one-character [`TokenKind::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticScanner;

impl<'a> Scanner<'a> for ArithmeticScanner {
    fn scan(&mut self, cursor: &mut Cursor<'a>) -> Token<'a> {
        cursor.skip_whitespace();

        let start = cursor.location();
        let Some(ch) = cursor.next_char() else {
            return cursor.end_of_input();
        };

        let kind = match ch {
            c if c.is_ascii_alphabetic() => {
                cursor.eat_while(|c| c.is_ascii_alphanumeric());
                TokenKind::UnaryPrefix
            }
            c if c.is_ascii_digit() => {
                cursor.eat_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            '*' if cursor.peek_char() == Some('*') => {
                cursor.next_char();
                TokenKind::Power
            }
            '*' => TokenKind::Multiply,
            '+' => TokenKind::Add,
            _ => TokenKind::Unknown,
        };

        cursor.token(kind, start)
    }
}
