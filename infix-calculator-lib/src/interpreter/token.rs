use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as the text it was read from.
    Number(String),
    /// A reference to the most recent result.
    Ans,
    Operator(Operator),
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    pub fn number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Ans => write!(f, "ans"),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            "ans" => Ok(Token::Ans),
            input => match input.parse::<f64>() {
                Ok(_) => Ok(Token::Number(input.to_string())),
                Err(_) => Err(()),
            },
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
