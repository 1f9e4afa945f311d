/// Expression errors.
///
/// Defines every failure that can occur while turning an expression string
/// into a number: unrecognized characters, unbalanced parentheses, operand
/// count mismatches and division by zero.
pub mod eval_error;
/// Formula book errors.
///
/// Errors raised while managing saved formulas: validation of new formulas,
/// lookups of unknown ids, unbound variables, and failures bubbling up from
/// the evaluator or the backing store.
pub mod formula_error;
/// Key-value store errors.
///
/// Errors raised by [`KeyValueStore`](crate::formula::store::KeyValueStore)
/// implementations while reading or writing blobs.
pub mod store_error;

pub use eval_error::EvalError;
pub use formula_error::FormulaError;
pub use store_error::StoreError;
