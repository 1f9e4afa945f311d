use thiserror::Error;

use crate::error::{EvalError, StoreError};

#[derive(Debug, Error)]
/// Represents all errors that can occur while managing or running saved
/// formulas.
pub enum FormulaError {
    /// A formula was given a blank name.
    #[error("Formula name cannot be empty.")]
    EmptyName,
    /// A formula was given a blank expression.
    #[error("Formula expression cannot be empty.")]
    EmptyExpression,
    /// No formula with this id exists.
    #[error("Unknown formula '{id}'.")]
    UnknownFormula {
        /// The id that was looked up.
        id: String,
    },
    /// Some free variables of the formula were not given a value.
    #[error("Please fill in all variable values. Missing: {}.", .names.join(", "))]
    MissingVariables {
        /// The unbound variables, in order of first appearance.
        names: Vec<String>,
    },
    /// Evaluating the formula's expression failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored formula list could not be decoded or encoded.
    #[error("Stored formulas are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
