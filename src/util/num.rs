/// Renders a value as the decimal text that is substituted for a variable.
///
/// Uses the shortest representation that reads back to the same `f64`, and
/// never switches to exponent notation, which the lexer does not accept.
/// Integral values carry no fractional part. Negative values keep their
/// leading `-`; since the grammar has no unary minus, an expression with a
/// negative substitution cannot be evaluated.
///
/// # Example
/// ```
/// use formulary::util::num::to_literal;
///
/// assert_eq!(to_literal(5.0), "5");
/// assert_eq!(to_literal(0.1), "0.1");
/// assert_eq!(to_literal(1e21), "1000000000000000000000");
/// assert_eq!(to_literal(-2.5), "-2.5");
/// ```
#[must_use]
pub fn to_literal(value: f64) -> String {
    format!("{value}")
}
