use std::fmt;
use std::fmt::Formatter;

/// Represents all errors that can occur while converting or evaluating
/// an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Used `ans` before any result exists.
    UnavailableReference,
    /// Unbalanced parentheses, either a stray `)` or an unclosed `(`.
    MismatchedParentheses,
    /// Malformed operand/operator arity, such as missing or leftover operands.
    InvalidExpression,
    /// The right-hand operand of a division is exactly zero.
    DivisionByZero,
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnavailableReference => write!(f, "'ans' is not available yet"),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            Self::InvalidExpression => write!(f, "Invalid expression"),
            Self::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for EvaluationError {}
