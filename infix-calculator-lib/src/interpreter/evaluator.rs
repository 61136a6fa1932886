use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reduces a postfix token sequence to a single numeric value.
///
/// Each number pushes onto an operand stack and each operator pops its right
/// operand, then its left, and pushes the result back. This is where arity
/// is enforced: missing operands empty the stack mid-expression and leftover
/// operands survive to the end, both of which are invalid.
///
/// returns: The value of the expression, or `None` when the sequence is
/// empty (nothing to evaluate is not an error).
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<Option<f64>, EvaluationError> {
    let mut operands: VecDeque<f64> = VecDeque::new();

    for token in postfix_tokens {
        match token {
            Token::Number(text) => {
                // Accepts a leading minus, for substituted negative results.
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvaluationError::InvalidExpression)?;
                operands.push_front(value);
            }
            Token::Operator(operator) => {
                // The right operand was pushed last, so it pops first.
                let right = operands
                    .pop_front()
                    .ok_or(EvaluationError::InvalidExpression)?;
                let left = operands
                    .pop_front()
                    .ok_or(EvaluationError::InvalidExpression)?;
                operands.push_front(operator.apply(left, right)?);
            }
            _ => return Err(EvaluationError::InvalidExpression),
        }
    }

    match operands.pop_front() {
        None => Ok(None),
        Some(result) if operands.is_empty() => Ok(Some(result)),
        Some(_) => Err(EvaluationError::InvalidExpression),
    }
}
