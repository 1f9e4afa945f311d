/// Represents a binary arithmetic operator.
///
/// These are the only operators the grammar knows. Every operator takes two
/// operands; there is no unary minus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// `+` and `-` bind weakest, `*` and `/` bind tighter, and `^` binds
    /// tightest.
    ///
    /// # Example
    /// ```
    /// use formulary::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Sub.precedence(), BinaryOperator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns how chains of this operator group, given the configured
    /// associativity of `^`. Every other operator is always left-associative.
    #[must_use]
    pub const fn associativity(self, power: Associativity) -> Associativity {
        match self {
            Self::Pow => power,
            _ => Associativity::Left,
        }
    }
}

/// How a chain of operators with equal precedence is grouped.
///
/// `Left` reads `2 ^ 3 ^ 2` as `(2 ^ 3) ^ 2 = 64`; `Right` reads it as
/// `2 ^ (3 ^ 2) = 512`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Associativity {
    /// Group from the left.
    #[default]
    Left,
    /// Group from the right.
    Right,
}

/// A single entry of an expression in postfix (Reverse Polish) order.
///
/// The parser produces a `Vec<PostfixItem>` and the evaluator consumes it.
/// Parentheses never appear here: their grouping is already encoded in the
/// order of the items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    /// A numeric operand.
    Number(f64),
    /// An operator applied to the two preceding operands.
    Operator(BinaryOperator),
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
