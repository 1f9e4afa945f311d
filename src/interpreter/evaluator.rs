use crate::{
    ast::{Associativity, BinaryOperator, PostfixItem},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// Every stage of the pipeline returns either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation settings.
///
/// `Options` is passed explicitly to each evaluation; nothing is kept between
/// calls. The default groups `^` from the left, so `2 ^ 3 ^ 2` is `64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// How chains of `^` are grouped.
    pub power_associativity: Associativity,
}

impl Options {
    /// Creates options with every setting at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self { power_associativity: Associativity::Left }
    }

    /// Returns these options with `^` grouped as given.
    #[must_use]
    pub const fn with_power_associativity(mut self, associativity: Associativity) -> Self {
        self.power_associativity = associativity;
        self
    }
}

/// Evaluates a postfix sequence and returns its value.
///
/// Numbers are pushed on an operand stack. Each operator pops the right
/// operand, then the left one, and pushes the result. A well-formed sequence
/// leaves exactly one value behind.
///
/// # Errors
/// - [`EvalError::InvalidExpression`] if an operator finds fewer than two
///   operands, or if the stack does not end with exactly one value.
/// - [`EvalError::DivisionByZero`] if a divisor is zero.
///
/// # Example
/// ```
/// use formulary::{
///     ast::{BinaryOperator, PostfixItem},
///     interpreter::evaluator::eval_postfix,
/// };
///
/// // 10 4 - 2 /
/// let items = [PostfixItem::Number(10.0),
///              PostfixItem::Number(4.0),
///              PostfixItem::Operator(BinaryOperator::Sub),
///              PostfixItem::Number(2.0),
///              PostfixItem::Operator(BinaryOperator::Div)];
/// assert_eq!(eval_postfix(&items).unwrap(), 3.0);
/// ```
pub fn eval_postfix(items: &[PostfixItem]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(items.len());

    for item in items {
        match *item {
            PostfixItem::Number(value) => stack.push(value),
            PostfixItem::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::invalid(format!("operator '{op}' is missing an operand")));
                };
                stack.push(eval_binary(op, left, right)?);
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvalError::invalid("nothing to evaluate")),
        values => Err(EvalError::invalid(format!("{} operands are missing an operator",
                                                 values.len() - 1))),
    }
}

/// Applies a binary operator to two operands.
///
/// Plain IEEE double-precision arithmetic: overflow gives infinity and
/// `(0 - 8) ^ 0.5` gives NaN. Only division checks its operand.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when `op` is `/` and `right` is
/// zero (of either sign).
///
/// # Example
/// ```
/// use formulary::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0).unwrap(), 1024.0);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Pow => Ok(left.powf(right)),
    }
}
