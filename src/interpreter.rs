/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the postfix items produced by the parser with a single
/// operand stack, applying each operator to the two most recent operands. It
/// is the last stage of the pipeline.
///
/// # Responsibilities
/// - Applies `+`, `-`, `*`, `/` and `^` to IEEE double-precision operands.
/// - Reports division by zero and operand/operator count mismatches.
/// - Holds the evaluation [`Options`](evaluator::Options).
pub mod evaluator;
/// The lexer module tokenizes numeric expressions.
///
/// The lexer reads an expression in which every variable has already been
/// replaced by a number and produces a stream of number, operator and
/// parenthesis tokens.
///
/// # Responsibilities
/// - Recognizes decimal literals such as `42`, `3.14`, `5.` and `.5`.
/// - Recognizes the operators `+ - * / ^` and parentheses.
/// - Rejects any other character, so the tokens always cover the whole input.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// The parser runs the shunting-yard algorithm over the token stream,
/// honoring operator precedence, associativity and parentheses.
///
/// # Responsibilities
/// - Converts infix tokens into [`PostfixItem`](crate::ast::PostfixItem)s.
/// - Reports unbalanced parentheses.
pub mod parser;
/// The variables module owns the identifier grammar.
///
/// Free variables are identifiers matching `[a-zA-Z_][a-zA-Z0-9_]*`. This
/// module finds them in an expression and substitutes numeric values for
/// them, so callers that prompt for values and the evaluator that consumes
/// them never disagree on what a variable name is.
///
/// # Responsibilities
/// - Lists the free variables of an expression.
/// - Replaces whole-word variable occurrences with numeric text.
/// - Pads operators and parentheses with whitespace before lexing.
pub mod variables;
