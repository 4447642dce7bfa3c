use std::fmt;

mod shunting_yard;
mod tokenizer;

pub use shunting_yard::{to_postfix, try_to_postfix};
pub use tokenizer::{tokenize, try_tokenize};

/// Precedence shared by `^`, the unary negate and pending function calls.
pub(crate) const FUNCTION_PRECEDENCE: u8 = 3;

/// A lexical token. Infix and postfix sequences are both plain `Vec<Token>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Separator(Separator),
    /// A variable reference or a function name; which one is decided by the
    /// converter, never by the tokenizer.
    Identifier(String),
}

impl Token {
    pub fn is_open(&self) -> bool {
        matches!(self, Token::Separator(Separator::Open))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Separator(separator) => write!(f, "{}", separator),
            Token::Identifier(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Unary minus. Only ever produced by the converter.
    Negate,
}

impl Operator {
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power | Operator::Negate => FUNCTION_PRECEDENCE,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Power)
    }

    /// Applies a binary operator. `Negate` ignores `left`.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => {
                if right == 2.0 {
                    left * left
                } else {
                    left.powf(right)
                }
            }
            Operator::Negate => -right,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Negate => '~',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    /// Only the user-facing symbols convert; `~` is not part of the syntax.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    Open,
    Close,
}

impl Separator {
    pub fn symbol(&self) -> char {
        match self {
            Separator::Open => '(',
            Separator::Close => ')',
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '(' => Ok(Separator::Open),
            ')' => Ok(Separator::Close),
            other => Err(other),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders a token sequence as space separated text, e.g. `2 3 4 * +`.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
