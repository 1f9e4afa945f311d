//! # formulary
//!
//! formulary evaluates user-programmable formulas: infix arithmetic
//! expressions over named variables, such as `(price - cost) / price * 100`.
//!
//! An expression goes through four stages:
//! 1. variable substitution, which replaces each bound variable with its value,
//! 2. tokenization into numbers, operators and parentheses,
//! 3. shunting-yard conversion to postfix order,
//! 4. postfix evaluation on an operand stack.
//!
//! The grammar has the operators `+ - * / ^` with the usual precedence,
//! parentheses, and non-negative decimal literals. There is no unary minus.
//! `^` groups from the left unless [`Options`] says otherwise.
//!
//! Saved formulas live in a [`formula::FormulaBook`] backed by any
//! [`formula::store::KeyValueStore`]; the evaluator itself keeps no state.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::interpreter::{
    evaluator::{EvalResult, eval_postfix},
    lexer::tokenize,
    parser::to_postfix,
    variables::substitute,
};
pub use crate::{error::EvalError, interpreter::evaluator::Options};

/// Defines the operators and the postfix form of an expression.
///
/// This module declares the binary operators with their precedence and
/// associativity, and the [`PostfixItem`](ast::PostfixItem) sequence the
/// parser hands to the evaluator.
pub mod ast;
/// Provides unified error types for evaluation and formula management.
///
/// This module defines every error that can be raised while evaluating an
/// expression, while managing saved formulas, or while talking to the store
/// that persists them.
///
/// # Responsibilities
/// - Defines one error enum per layer (evaluator, formula book, store).
/// - Carries enough detail for a message the end user can act on.
pub mod error;
/// Saved, named formulas.
///
/// This module lets users keep a book of formulas, list their variables,
/// and evaluate them with supplied values. The book is persisted through a
/// small key-value store interface, so the evaluator never touches storage.
pub mod formula;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together variable substitution, lexing, shunting-yard
/// parsing and postfix evaluation.
///
/// # Responsibilities
/// - Owns the identifier grammar shared by substitution and discovery.
/// - Converts expression text into a number or a precise error.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Evaluates an expression with the given variable values.
///
/// Every free variable in `expression` must be a key of `variables`; extra
/// keys are harmless. `^` groups from the left.
///
/// # Errors
/// - [`EvalError::InvalidExpression`] for characters outside the grammar
///   (including unbound variables), an empty expression, or operators and
///   operands that do not pair up.
/// - [`EvalError::MismatchedParentheses`] for unbalanced parentheses.
/// - [`EvalError::DivisionByZero`] if a divisor evaluates to zero.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use formulary::{EvalError, evaluate};
///
/// let vars = HashMap::from([("a".to_string(), 2.0), ("b".to_string(), 3.0)]);
/// assert_eq!(evaluate("a + b", &vars).unwrap(), 5.0);
/// assert_eq!(evaluate("2 + 3 * 4", &HashMap::new()).unwrap(), 14.0);
///
/// // `c` has no value.
/// assert!(matches!(evaluate("a + c", &vars), Err(EvalError::InvalidExpression { .. })));
/// ```
pub fn evaluate(expression: &str, variables: &HashMap<String, f64>) -> EvalResult<f64> {
    evaluate_with(expression, variables, &Options::new())
}

/// Evaluates an expression with explicit [`Options`].
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use formulary::{Options, ast::Associativity, evaluate_with};
///
/// let vars = HashMap::new();
/// let left = Options::new();
/// let right = Options::new().with_power_associativity(Associativity::Right);
///
/// assert_eq!(evaluate_with("2 ^ 3 ^ 2", &vars, &left).unwrap(), 64.0);
/// assert_eq!(evaluate_with("2 ^ 3 ^ 2", &vars, &right).unwrap(), 512.0);
/// ```
pub fn evaluate_with(expression: &str,
                     variables: &HashMap<String, f64>,
                     options: &Options)
                     -> EvalResult<f64> {
    let numeric = substitute(expression, variables);
    let tokens = tokenize(&numeric)?;
    let postfix = to_postfix(&tokens, options.power_associativity)?;
    eval_postfix(&postfix)
}
