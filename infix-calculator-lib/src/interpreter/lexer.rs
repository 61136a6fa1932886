use crate::interpreter::token::Token;
use itertools::Itertools;

/// Splits the raw expression text into tokens.
///
/// Scans left to right, recognizing (in this priority) numeric literals,
/// the case-insensitive keyword `ans`, and the symbols `+ - * / ( )`.
/// Every other character, whitespace included, is skipped without producing
/// a token, so tokenizing never fails; structural validation happens
/// downstream in the converter and evaluator.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in reading order.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = expression;
    while let Some(character) = remaining.chars().next() {
        if character.is_ascii_digit() {
            let length = numeric_literal_length(remaining);
            tokens.push(Token::number(&remaining[..length]));
            remaining = &remaining[length..];
        } else if starts_with_ans(remaining) {
            tokens.push(Token::Ans);
            remaining = &remaining["ans".len()..];
        } else {
            if let Ok(token) = character.to_string().parse() {
                tokens.push(token);
            }
            remaining = &remaining[character.len_utf8()..];
        }
    }
    tokens
}

/// Length in bytes of the numeric literal at the start of the text:
/// a digit run, optionally followed by a dot and a second digit run.
/// The trailing run may be empty, so `2.` is a complete literal.
fn numeric_literal_length(text: &str) -> usize {
    let mut characters = text.chars().peekable();
    let mut length = characters
        .peeking_take_while(|c| c.is_ascii_digit())
        .count();
    if characters.peek() == Some(&'.') {
        characters.next();
        length += 1;
        length += characters
            .peeking_take_while(|c| c.is_ascii_digit())
            .count();
    }
    length
}

/// The keyword match is positional, not word-bounded: `answer` begins with
/// an `ans` token and `ansans` is two of them.
fn starts_with_ans(text: &str) -> bool {
    text.get(.."ans".len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("ans"))
}
