use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The expression is not well formed.
    ///
    /// Raised for characters outside the grammar, for an expression with no
    /// tokens at all, and when operators and operands do not pair up.
    #[error("Invalid expression: {details}.")]
    InvalidExpression {
        /// What exactly was wrong with the expression.
        details: String,
    },
    /// A parenthesis has no partner.
    #[error("Mismatched parentheses: unmatched '{unmatched}'.")]
    MismatchedParentheses {
        /// The parenthesis that was left unmatched, `(` or `)`.
        unmatched: char,
    },
    /// The right-hand operand of a division was zero.
    #[error("Division by zero.")]
    DivisionByZero,
}

impl EvalError {
    /// Shorthand for an [`EvalError::InvalidExpression`] with the given
    /// details.
    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }
}
