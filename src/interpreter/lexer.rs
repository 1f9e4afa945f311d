use logos::Logos;

use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Represents a lexical token of a numeric expression.
///
/// Identifiers are deliberately absent: by the time an expression reaches the
/// lexer every variable must have been substituted, and anything that is not
/// a number, an operator or a parenthesis is a lexing error.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `5.` or `42`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid float.
/// - `None`: Otherwise, which makes the lexer report an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits a fully numeric expression into tokens.
///
/// Every non-whitespace character of `source` must belong to some token, so
/// trailing garbage such as `1 + 2 x` is rejected instead of silently
/// dropped.
///
/// # Errors
/// Returns [`EvalError::InvalidExpression`] if `source` contains a character
/// outside the grammar, or if it contains no tokens at all.
///
/// # Example
/// ```
/// use formulary::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1 + .5)*2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Number(1.0),
///                 Token::Plus,
///                 Token::Number(0.5),
///                 Token::RParen,
///                 Token::Star,
///                 Token::Number(2.0)]);
///
/// assert!(tokenize("2 & 3").is_err());
/// assert!(tokenize("   ").is_err());
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            return Err(EvalError::invalid(format!("unexpected character(s) '{slice}'")));
        }
    }

    if tokens.is_empty() {
        return Err(EvalError::invalid("expression is empty"));
    }

    Ok(tokens)
}
