pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given infix expression to a numeric value.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `last_result`: The most recent result, substituted for `ans` references.
///
/// returns: The value of the expression, or `None` when the expression
/// contains nothing to evaluate.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluate;
///
/// let result = evaluate("2 + 3 * 4", None);
/// assert_eq!(result, Ok(Some(14.0)));
/// ```
pub fn evaluate(expression: &str, last_result: Option<f64>) -> Result<Option<f64>, EvaluationError> {
    let tokens = lexer::tokenize(expression);
    let postfix_tokens = parser::convert_to_postfix(tokens, last_result)?;
    evaluator::evaluate_postfix(postfix_tokens)
}

/// Pretty-prints the given tokens with whitespace between them.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::number("2"),
///     Token::number("3"),
///     "+".parse().unwrap(),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// print!("{}", pretty_printed_tokens);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
    expression = {
    "2+3*4",
    "8-3-2",
    "(2+3)*4",
    "100/4/5",
    "2 * (3 + 4) - 1",
    "1.5 + 2.25",
    },
    expected_result = {
    14.0,
    3.0,
    20.0,
    5.0,
    13.0,
    3.75,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected_result: f64) {
        use pretty_assertions::assert_eq;
        let actual = evaluate(expression, None).unwrap();
        assert_eq!(actual, Some(expected_result));
    }

    #[test]
    fn evaluate_substitutes_last_result_for_ans() {
        let result = evaluate("ans + 5", Some(10.0)).unwrap();
        assert_eq!(result, Some(15.0));
    }

    #[test]
    fn evaluate_ans_without_last_result_returns_err() {
        let result = evaluate("ans + 5", None);
        assert_eq!(result, Err(EvaluationError::UnavailableReference));
    }

    #[test]
    fn evaluate_division_by_zero_returns_err() {
        let result = evaluate("5/0", None);
        assert_eq!(result, Err(EvaluationError::DivisionByZero));
    }

    #[parameterized(
    expression = {
    "(1+2",
    "1+2)",
    }
    )]
    fn evaluate_mismatched_parentheses_returns_err(expression: &str) {
        use pretty_assertions::assert_eq;
        let result = evaluate(expression, None);
        assert_eq!(result, Err(EvaluationError::MismatchedParentheses));
    }

    #[parameterized(
    expression = {
    "1 2",
    "+",
    "1++2",
    }
    )]
    fn evaluate_malformed_arity_returns_err(expression: &str) {
        use pretty_assertions::assert_eq;
        let result = evaluate(expression, None);
        assert_eq!(result, Err(EvaluationError::InvalidExpression));
    }

    #[test]
    fn evaluate_empty_expression_yields_no_value() {
        let result = evaluate("", None).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn evaluate_unrecognized_characters_are_ignored() {
        let result = evaluate("what is 2+3?", None).unwrap();
        assert_eq!(result, Some(5.0));
    }

    #[test]
    fn postfix_tokens_pretty_print_space_separated() {
        let tokens = lexer::tokenize("2+3*4");
        let postfix_tokens = parser::convert_to_postfix(tokens, None).unwrap();

        let pretty_printed = tokens_to_string(&postfix_tokens).unwrap();

        assert_eq!(pretty_printed, "2 3 4 * +");
    }

    #[test]
    fn empty_tokens_pretty_print_as_empty_string() {
        let pretty_printed = tokens_to_string(&[]).unwrap();
        assert_eq!(pretty_printed, "");
    }
}
