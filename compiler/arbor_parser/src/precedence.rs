//! Operator precedence table.
//!
//! The table is configuration, not derived data: extending the grammar means
//! adding a [`Level`], never touching the folding algorithm.

use arbor_lexer::TokenKind;

/// Where an operator sits relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Between two operands: `a + b`
    Infix,
    /// Before one operand: `abs a`
    Prefix,
}

/// One binding-strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level {
    /// Operator token folded at this tier
    pub kind: TokenKind,
    /// How the operator takes its operands
    pub fixity: Fixity,
}

impl Level {
    /// An infix tier for `kind`
    pub const fn infix(kind: TokenKind) -> Self {
        Self {
            kind,
            fixity: Fixity::Infix,
        }
    }

    /// A prefix tier for `kind`
    pub const fn prefix(kind: TokenKind) -> Self {
        Self {
            kind,
            fixity: Fixity::Prefix,
        }
    }
}

/// Arithmetic tiers, loosest binding first.
pub const ARITHMETIC: [Level; 4] = [
    Level::infix(TokenKind::Add),
    Level::infix(TokenKind::Multiply),
    Level::infix(TokenKind::Power),
    Level::prefix(TokenKind::UnaryPrefix),
];

/// Ordered precedence levels, loosest binding first.
///
/// A kind should appear at most once; lookups report the loosest tier that
/// names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precedence {
    levels: Vec<Level>,
}

impl Default for Precedence {
    fn default() -> Self {
        Self::new(ARITHMETIC)
    }
}

impl Precedence {
    /// Build a table from tiers listed loosest first
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    /// All tiers, loosest first
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Position of the tier for `kind`; higher binds tighter
    pub fn rank(&self, kind: TokenKind) -> Option<usize> {
        self.levels.iter().position(|level| level.kind == kind)
    }

    /// How `kind` takes its operands, if it is an operator of this table
    pub fn fixity(&self, kind: TokenKind) -> Option<Fixity> {
        self.rank(kind).map(|rank| self.levels[rank].fixity)
    }

    /// Returns true if `kind` is folded by some tier
    pub fn is_operator(&self, kind: TokenKind) -> bool {
        self.rank(kind).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_order() {
        let table = Precedence::default();
        let add = table.rank(TokenKind::Add).unwrap();
        let mul = table.rank(TokenKind::Multiply).unwrap();
        let pow = table.rank(TokenKind::Power).unwrap();
        let unary = table.rank(TokenKind::UnaryPrefix).unwrap();
        assert!(add < mul && mul < pow && pow < unary);
    }

    #[test]
    fn test_fixity_lookup() {
        let table = Precedence::default();
        assert_eq!(table.fixity(TokenKind::Add), Some(Fixity::Infix));
        assert_eq!(table.fixity(TokenKind::UnaryPrefix), Some(Fixity::Prefix));
        assert_eq!(table.fixity(TokenKind::Number), None);
        assert!(!table.is_operator(TokenKind::Unknown));
    }

    #[test]
    fn test_custom_table() {
        let table = Precedence::new([Level::infix(TokenKind::Multiply)]);
        assert!(table.is_operator(TokenKind::Multiply));
        assert!(!table.is_operator(TokenKind::Add));
        assert_eq!(table.levels().len(), 1);
    }
}
