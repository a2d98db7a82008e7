//! Operator precedence for emitted Python.

/// Binding strength reported by an expression renderer.
///
/// Lower ranks bind tighter: `Atomic` is 0 and `Lambda` the loosest real
/// operator. `None` (99) marks contexts that never force parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Order {
    /// `0` literals, identifiers
    Atomic,
    /// tuples, lists, dictionaries
    Collection,
    /// `` `expression...` ``
    StringConversion,
    /// `.` `[]`
    Member,
    /// `()`
    FunctionCall,
    /// `**`
    Exponentiation,
    /// unary `+` `-`
    UnarySign,
    /// `~`
    BitwiseNot,
    /// `*` `/` `//` `%`
    Multiplicative,
    /// `+` `-`
    Additive,
    /// `<<` `>>`
    BitwiseShift,
    /// `&`
    BitwiseAnd,
    /// `^`
    BitwiseXor,
    /// `|`
    BitwiseOr,
    /// `in`, `not in`, `is`, `is not`, `<`, `<=`, `>`, `>=`, `!=`, `==`
    Relational,
    /// `not`
    LogicalNot,
    /// `and`
    LogicalAnd,
    /// `or`
    LogicalOr,
    /// `if` … `else`
    Conditional,
    /// `lambda`
    Lambda,
    /// No enclosing operator; never parenthesized.
    None,
}

impl Order {
    /// Numeric rank. Member and function-call carry fractional ranks so
    /// `a.b()` chains never over-parenthesize.
    pub fn rank(self) -> f64 {
        match self {
            Self::Atomic => 0.0,
            Self::Collection | Self::StringConversion => 1.0,
            Self::Member => 2.1,
            Self::FunctionCall => 2.2,
            Self::Exponentiation => 3.0,
            Self::UnarySign | Self::BitwiseNot => 4.0,
            Self::Multiplicative => 5.0,
            Self::Additive => 6.0,
            Self::BitwiseShift => 7.0,
            Self::BitwiseAnd => 8.0,
            Self::BitwiseXor => 9.0,
            Self::BitwiseOr => 10.0,
            Self::Relational => 11.0,
            Self::LogicalNot => 12.0,
            Self::LogicalAnd => 13.0,
            Self::LogicalOr => 14.0,
            Self::Conditional => 15.0,
            Self::Lambda => 16.0,
            Self::None => 99.0,
        }
    }

    /// Whether an expression of this rank must be parenthesized when
    /// substituted into a context requiring `outer` binding strength.
    pub fn needs_parens_in(self, outer: Order) -> bool {
        self.rank() > outer.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Order::Atomic.rank() < Order::Member.rank());
        assert!(Order::Member.rank() < Order::FunctionCall.rank());
        assert!(Order::LogicalAnd.rank() < Order::LogicalOr.rank());
        assert!(Order::Lambda.rank() < Order::None.rank());
    }

    #[test]
    fn test_parens_only_for_strictly_looser() {
        // Looser child in a tighter context: wrap.
        assert!(Order::LogicalAnd.needs_parens_in(Order::LogicalNot));
        // Same rank: no wrap.
        assert!(!Order::LogicalAnd.needs_parens_in(Order::LogicalAnd));
        // Tighter child: no wrap.
        assert!(!Order::Atomic.needs_parens_in(Order::Relational));
        // None context never wraps.
        assert!(!Order::Lambda.needs_parens_in(Order::None));
    }
}
