mod infix_converter;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Converts the given infix tokens into postfix (Reverse Polish Notation)
/// order, which can be evaluated with a single stack pass.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format.
/// * `last_result`: The most recent result, substituted for `ans` tokens.
///
/// returns: The same expression in postfix order, containing only number
/// and operator tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::parser::convert_to_postfix;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::number("2"),
///     "+".parse().unwrap(),
///     Token::number("3"),
/// ];
/// let postfix_tokens = convert_to_postfix(infix_tokens, None)?;
/// # Ok::<(), infix_calculator::interpreter::error::EvaluationError>(())
/// ```
pub fn convert_to_postfix(
    infix_tokens: Vec<Token>,
    last_result: Option<f64>,
) -> Result<Vec<Token>, EvaluationError> {
    infix_to_postfix(infix_tokens, last_result)
}
