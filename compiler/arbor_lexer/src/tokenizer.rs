//! Tokenizer implementation for Arbor
//! Drives a [`Scanner`] over a [`Cursor`] to produce tokens on demand

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::scanner::ArithmeticScanner;
use crate::token::{Location, Token};

/// Recognizes the shape of the next token of one grammar.
///
/// A scanner reads characters exclusively through `next_char` and
/// `peek_char` on the cursor it is handed, and must skip leading whitespace
/// itself. It returns [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput)
/// exactly when no characters remain; every other token must consume at
/// least one character.
pub trait Scanner<'a> {
    /// Produce the next token from `cursor`
    fn scan(&mut self, cursor: &mut Cursor<'a>) -> Token<'a>;
}

impl<'a, F> Scanner<'a> for F
where
    F: FnMut(&mut Cursor<'a>) -> Token<'a>,
{
    fn scan(&mut self, cursor: &mut Cursor<'a>) -> Token<'a> {
        self(cursor)
    }
}

/// The main tokenizer struct that holds the state of the scanning process
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, S = ArithmeticScanner> {
    /// Position over the borrowed source
    cursor: Cursor<'a>,
    /// Recognizes token shapes
    scanner: S,
    /// Set once the iterator has yielded end of input
    finished: bool,
}

impl<'a> Tokenizer<'a, ArithmeticScanner> {
    /// Create a tokenizer for the arithmetic grammar
    pub fn arithmetic(source: &'a str) -> Self {
        Self::new(source, ArithmeticScanner)
    }
}

impl<'a, F> Tokenizer<'a, F>
where
    F: FnMut(&mut Cursor<'a>) -> Token<'a>,
{
    /// Create a tokenizer whose scanner is a closure
    pub fn from_fn(source: &'a str, scan: F) -> Self {
        Self::new(source, scan)
    }
}

impl<'a, S> Tokenizer<'a, S>
where
    S: Scanner<'a>,
{
    /// Bind a tokenizer to `source` and the scanner that reads it
    pub fn new(source: &'a str, scanner: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            scanner,
            finished: false,
        }
    }

    /// Rewind to the start of the source. Required before a second pass.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.finished = false;
    }

    /// Get the next token from the source
    pub fn next_token(&mut self) -> Token<'a> {
        let before = self.cursor.offset();
        let token = self.scanner.scan(&mut self.cursor);

        debug_assert_eq!(
            token.is_end(),
            token.text.is_none(),
            "scanner returned {token:?} with inconsistent text"
        );
        debug_assert!(
            token.is_end() || self.cursor.offset() > before,
            "scanner returned {token:?} without consuming input"
        );

        #[cfg(feature = "logging")]
        log::trace!("scanned {} at {}", token, token.location);

        token
    }

    /// Count every token in the source, leaving the tokenizer rewound.
    ///
    /// Useful to size node storage before collecting.
    pub fn count_tokens(&mut self) -> usize {
        self.reset();
        let mut count = 0;
        while !self.next_token().is_end() {
            count += 1;
        }
        self.reset();
        count
    }

    /// Next character of the source, `None` past the end
    pub fn next_char(&mut self) -> Option<char> {
        self.cursor.next_char()
    }

    /// Character the next [`next_char`](Self::next_char) call returns
    pub fn peek_char(&self) -> Option<char> {
        self.cursor.peek_char()
    }

    /// The position of the next unread character
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Current 1-based line
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Current 1-based column
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// The borrowed source buffer
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// The underlying cursor
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }
}

impl<'a, S> Iterator for Tokenizer<'a, S>
where
    S: Scanner<'a>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

impl<'a, S> FusedIterator for Tokenizer<'a, S> where S: Scanner<'a> {}
