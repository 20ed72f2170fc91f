//! Character-level access to a borrowed source buffer.
//!
//! A [`Cursor`] hands out one `char` at a time and keeps the line and column
//! of the next unread character up to date. Scanners build tokens on top of
//! [`Cursor::next_char`] and [`Cursor::peek_char`] only.

use crate::token::{Location, Token, TokenKind};

/// Where a cursor is in its single pass over the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Nothing has been read since construction or the last reset
    Fresh,
    /// At least one character has been handed out
    Running,
    /// A read hit the end of the buffer
    Exhausted,
}

/// Scanning position over a borrowed, never copied, source buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source code being scanned
    source: &'a str,
    /// Byte offset of the next unread character
    offset: usize,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based, in characters)
    column: usize,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            state: CursorState::Fresh,
        }
    }

    /// Rewind to the first character, line 1, column 1
    pub fn reset(&mut self) {
        self.offset = 0;
        self.line = 1;
        self.column = 1;
        self.state = CursorState::Fresh;
    }

    /// Return the character at the cursor and advance past it.
    ///
    /// Returns `None` at or past the end of the buffer, however many times
    /// it is called.
    pub fn next_char(&mut self) -> Option<char> {
        let Some(ch) = self.rest().chars().next() else {
            self.state = CursorState::Exhausted;
            return None;
        };

        self.state = CursorState::Running;
        self.offset += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\r' => self.column = 1,
            _ => self.column += 1,
        }
        Some(ch)
    }

    /// Return the character the next [`next_char`](Self::next_char) call
    /// would return, without advancing.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume characters while `pred` holds, returning how many were eaten
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut eaten = 0;
        while self.peek_char().is_some_and(&mut pred) {
            self.next_char();
            eaten += 1;
        }
        eaten
    }

    /// Skip any run of whitespace before the next lexeme
    pub fn skip_whitespace(&mut self) -> usize {
        self.eat_while(char::is_whitespace)
    }

    /// Consume whole characters until `len` more bytes have been read.
    pub fn advance_bytes(&mut self, len: usize) {
        let target = (self.offset + len).min(self.source.len());
        while self.offset < target {
            if self.next_char().is_none() {
                break;
            }
        }
    }

    /// Build a token whose text runs from `start` up to the cursor
    pub fn token(&self, kind: TokenKind, start: Location) -> Token<'a> {
        Token::new(kind, &self.source[start.offset..self.offset], start)
    }

    /// Build the end-of-input marker at the cursor
    pub fn end_of_input(&self) -> Token<'a> {
        Token::end_of_input(self.location())
    }

    /// The position of the next unread character
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// The unread remainder of the source
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The whole source buffer
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next unread character
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current 1-based line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current 1-based column
    pub fn column(&self) -> usize {
        self.column
    }

    /// Where the cursor is in its pass
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Returns true once nothing is left to read
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }
}
