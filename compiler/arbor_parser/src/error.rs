use std::fmt;

use arbor_ast::AstError;
use arbor_lexer::{Location, Token, TokenKind};

/// The token an error points at, detached from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    /// Kind of the offending token
    pub kind: TokenKind,
    /// Its exact source text
    pub text: String,
    /// Where it starts
    pub location: Location,
}

impl From<&Token<'_>> for Offender {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind,
            text: token.lexeme().to_string(),
            location: token.location,
        }
    }
}

impl fmt::Display for Offender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.text, self.location)
    }
}

/// Why a token sequence does not form one expression
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// An operator has nothing after it to take as operand
    #[error("operator {0} is missing its operand")]
    MissingOperand(Offender),
    /// An infix operator starts the expression
    #[error("operator {0} has no left operand")]
    MissingLeftOperand(Offender),
    /// An operator stands where an operand is required
    #[error("expected an operand, found operator {0}")]
    AdjacentOperators(Offender),
    /// Two operands follow each other with no operator between them
    #[error("operand {0} is not joined to the expression by an operator")]
    DanglingOperand(Offender),
}

impl Malformed {
    /// The token the problem was detected at
    pub fn offender(&self) -> &Offender {
        match self {
            Malformed::MissingOperand(at)
            | Malformed::MissingLeftOperand(at)
            | Malformed::AdjacentOperators(at)
            | Malformed::DanglingOperand(at) => at,
        }
    }
}

/// Errors that end a parse attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scanner could not classify a character
    #[error("unknown token {0}")]
    Lexical(Offender),
    /// More tokens than node storage can hold
    #[error("node storage exhausted: capacity is {capacity} nodes")]
    StorageExhausted {
        /// The configured capacity
        capacity: usize,
    },
    /// The tokens do not form a single expression
    #[error("malformed expression: {0}")]
    Malformed(#[from] Malformed),
    /// Nothing but whitespace
    #[error("no tokens found")]
    EmptyInput,
}

impl From<AstError> for ParseError {
    fn from(err: AstError) -> Self {
        match err {
            AstError::StorageExhausted { capacity } => ParseError::StorageExhausted { capacity },
        }
    }
}

/// A result type for parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
