//! Token data model: kinds, source locations and borrowed lexemes.

use std::fmt;

/// Represents a token's location in the source code.
///
/// This struct tracks the position of a token in the source text, including
/// line and column numbers (1-based) and the byte offset (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The classification of a lexeme.
///
/// Operator kinds are the ones a precedence table can refer to; `Number` is
/// the only plain operand kind of the arithmetic grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// No characters remain in the source
    EndOfInput,
    /// A run of decimal digits
    Number,
    /// `+`
    Add,
    /// `*`
    Multiply,
    /// `**`
    Power,
    /// An identifier, applied as a prefix operator to the operand after it
    UnaryPrefix,
    /// A character no rule recognizes
    Unknown,
}

impl TokenKind {
    /// Returns true for the kinds that take operands
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Multiply | TokenKind::Power | TokenKind::UnaryPrefix
        )
    }

    /// Short stable name used in diagnostic output
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Number => "Number",
            TokenKind::Add => "Add",
            TokenKind::Multiply => "Multiply",
            TokenKind::Power => "Power",
            TokenKind::UnaryPrefix => "UnaryPrefix",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme borrowing its text from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// The classification of the lexeme
    pub kind: TokenKind,
    /// The exact source text; `None` only for [`TokenKind::EndOfInput`]
    pub text: Option<&'a str>,
    /// Where the lexeme starts
    pub location: Location,
}

impl<'a> Token<'a> {
    /// Creates a token over a slice of the source.
    pub fn new(kind: TokenKind, text: &'a str, location: Location) -> Self {
        debug_assert!(kind != TokenKind::EndOfInput, "end of input carries no text");
        Self {
            kind,
            text: Some(text),
            location,
        }
    }

    /// Creates the end-of-input marker at `location`.
    pub fn end_of_input(location: Location) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: None,
            location,
        }
    }

    /// Returns true if this token marks the end of the source
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The source text, or the empty string at end of input
    pub fn lexeme(&self) -> &'a str {
        self.text.unwrap_or("")
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: '{}'", self.kind, self.lexeme())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
