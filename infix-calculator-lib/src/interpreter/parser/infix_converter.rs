use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Rewrites infix tokens into postfix (Reverse Polish Notation) order using
/// the shunting-yard algorithm.
///
/// `ans` tokens are substituted with `last_result` as number tokens; an `ans`
/// without a previous result is an error. Parenthesis balance is the only
/// structural property checked here: operand/operator arity is left to the
/// evaluator, so an expression like `1+` converts successfully and fails
/// later.
pub fn infix_to_postfix(
    original_tokens: Vec<Token>,
    last_result: Option<f64>,
) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Ans => match last_result {
                None => return Err(EvaluationError::UnavailableReference),
                Some(value) => output.push(Token::Number(value.to_string())),
            },
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            // A leftover open parenthesis was never closed.
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop_front() {
            None => return Err(EvaluationError::MismatchedParentheses),
            // Discard the matching open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: Operator,
) {
    loop {
        match operators.front() {
            None | Some(Token::OpenParenthesis) => break,
            Some(Token::Operator(top_operator)) => {
                // Equal precedence pops as well: every operator is
                // left-associative, so same-precedence chains must
                // evaluate left to right.
                if !top_operator.precedence_ge(&operator) {
                    break;
                }
            }
            // Only operators and open parentheses are ever pushed.
            Some(_) => break,
        }
        if let Some(top_operator_token) = operators.pop_front() {
            output.push(top_operator_token);
        }
    }

    operators.push_front(Token::Operator(operator));
}
