use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::util::num::to_literal;

/// The grammar of a variable name.
pub const IDENTIFIER_PATTERN: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

lazy_static! {
    static ref WORD: Regex =
        Regex::new(&format!(r"\b{IDENTIFIER_PATTERN}\b")).expect("identifier pattern is a valid regex");
    static ref WHOLE_IDENTIFIER: Regex =
        Regex::new(&format!("^{IDENTIFIER_PATTERN}$")).expect("identifier pattern is a valid regex");
    static ref SYMBOL: Regex = Regex::new(r"([+\-*/^()])").expect("symbol pattern is a valid regex");
}

/// Returns `true` if `name` is a valid variable name.
///
/// # Example
/// ```
/// use formulary::interpreter::variables::is_identifier;
///
/// assert!(is_identifier("rate_of_tax2"));
/// assert!(is_identifier("_x"));
/// assert!(!is_identifier("2x"));
/// assert!(!is_identifier("a-b"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    WHOLE_IDENTIFIER.is_match(name)
}

/// Lists the free variables of an expression.
///
/// A variable is a whole word matching the identifier grammar, exactly the
/// words [`substitute`] replaces. Any such word counts, including `inf` and
/// `nan`. Letters glued to a number, as in `2a`, are not a word and are left
/// for the lexer to reject. Each name is reported once, in order of first
/// appearance.
///
/// # Example
/// ```
/// use formulary::interpreter::variables::free_variables;
///
/// assert_eq!(free_variables("(price - cost) / price * 100"), vec!["price", "cost"]);
/// assert_eq!(free_variables("rate - inf"), vec!["rate", "inf"]);
/// assert!(free_variables("2 + 3").is_empty());
/// ```
#[must_use]
pub fn free_variables(expression: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for word in WORD.find_iter(expression) {
        let name = word.as_str();
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Replaces variables with their values and pads every symbol with spaces.
///
/// The expression is scanned once for whole words. A word with a binding is
/// replaced by its value, so `a` is never replaced inside `ab` and `rate`
/// never inside `rateOfTax`: the longest name always wins. Words without a
/// binding are left in place for the lexer to reject. Keys that are not
/// valid identifiers can never be a whole word and have no effect.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use formulary::interpreter::variables::substitute;
///
/// let variables = HashMap::from([("rate".to_string(), 5.0), ("rateOfTax".to_string(), 20.0)]);
/// let text = substitute("rateOfTax-rate", &variables);
/// assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["20", "-", "5"]);
/// ```
#[must_use]
pub fn substitute(expression: &str, variables: &HashMap<String, f64>) -> String {
    let replaced = WORD.replace_all(expression, |word: &Captures<'_>| {
                           let name = &word[0];
                           variables.get(name)
                                    .map_or_else(|| name.to_string(), |value| to_literal(*value))
                       });

    SYMBOL.replace_all(&replaced, " $1 ").into_owned()
}
