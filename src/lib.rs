//! Arithmetic expression evaluation with variables and unary functions.
//!
//! Expressions are tokenized, converted to postfix order with the
//! shunting-yard algorithm and run on an operand stack. A compiled postfix
//! sequence can be kept and evaluated again while variable bindings change.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod symbols;
pub mod token;

pub use engine::Calculator;
pub use error::CalcError;
pub use symbols::{Function, Overlay, SymbolTable, Symbols};
pub use token::{render, Operator, Separator, Token};

/// Evaluates `expression` against the default constants and functions.
pub fn evaluate_expression(expression: &str) -> f64 {
    Calculator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_expression() {
        assert_eq!(evaluate_expression("2+3*4"), 14.0);
        assert_eq!(evaluate_expression("sqrt(16)"), 4.0);
        assert_eq!(evaluate_expression("(2+3"), 0.0);
    }
}
