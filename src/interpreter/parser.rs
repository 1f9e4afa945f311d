use crate::{
    ast::{Associativity, BinaryOperator, PostfixItem},
    error::EvalError,
    interpreter::{evaluator::EvalResult, lexer::Token},
};

/// An entry of the operator stack used during conversion.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(BinaryOperator),
    LParen,
}

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// Numbers go straight to the output. An operator first moves every stacked
/// operator that binds at least as tightly to the output, then is stacked
/// itself. When `^` is configured as [`Associativity::Right`], an incoming
/// `^` only displaces strictly tighter operators, so `2 ^ 3 ^ 2` groups as
/// `2 ^ (3 ^ 2)`. Parentheses are stacked and unwound, and never appear in
/// the output.
///
/// Runs in a single left-to-right pass.
///
/// # Parameters
/// - `tokens`: The infix token stream.
/// - `power`: How chains of `^` are grouped.
///
/// # Errors
/// Returns [`EvalError::MismatchedParentheses`] when a `)` has no opening
/// partner or a `(` is never closed.
///
/// # Example
/// ```
/// use formulary::{
///     ast::{Associativity, BinaryOperator, PostfixItem},
///     interpreter::{lexer::tokenize, parser::to_postfix},
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let postfix = to_postfix(&tokens, Associativity::Left).unwrap();
/// assert_eq!(postfix,
///            vec![PostfixItem::Number(2.0),
///                 PostfixItem::Number(3.0),
///                 PostfixItem::Number(4.0),
///                 PostfixItem::Operator(BinaryOperator::Mul),
///                 PostfixItem::Operator(BinaryOperator::Add)]);
/// ```
pub fn to_postfix(tokens: &[Token], power: Associativity) -> EvalResult<Vec<PostfixItem>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => output.push(PostfixItem::Number(*value)),
            Token::LParen => stack.push(Pending::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(PostfixItem::Operator(op)),
                    Some(Pending::LParen) => break,
                    None => return Err(EvalError::MismatchedParentheses { unmatched: ')' }),
                }
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Caret => {
                let op = token_to_binary_operator(token).ok_or_else(|| {
                             EvalError::invalid(format!("'{token:?}' is not an operator"))
                         })?;
                while let Some(&Pending::Operator(top)) = stack.last()
                      && should_pop(top, op, power)
                {
                    stack.pop();
                    output.push(PostfixItem::Operator(top));
                }
                stack.push(Pending::Operator(op));
            },
            Token::Ignored => {
                return Err(EvalError::invalid("whitespace reached the parser"));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(PostfixItem::Operator(op)),
            Pending::LParen => return Err(EvalError::MismatchedParentheses { unmatched: '(' }),
        }
    }

    Ok(output)
}

/// Decides whether the operator on top of the stack leaves it before
/// `incoming` is pushed.
const fn should_pop(top: BinaryOperator, incoming: BinaryOperator, power: Associativity) -> bool {
    match incoming.associativity(power) {
        Associativity::Left => top.precedence() >= incoming.precedence(),
        Associativity::Right => top.precedence() > incoming.precedence(),
    }
}

/// Maps an operator token to its [`BinaryOperator`].
///
/// Returns `None` for numbers, parentheses and whitespace.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
