/// Numeric text helpers.
///
/// This module converts between `f64` values and the decimal text the lexer
/// understands. Substituted variable values go through [`num::to_literal`] so
/// that the text handed to the lexer never uses exponent notation.
pub mod num;
