use crate::error::CalcError;
use crate::evaluator;
use crate::symbols::{Overlay, SymbolTable};
use crate::token::{self, Token};
use rayon::prelude::*;
use std::collections::HashMap;

/// An expression engine owning its symbol table.
///
/// ```
/// use evalix_rs::Calculator;
///
/// let mut calc = Calculator::new();
/// let i = calc.evaluate("2+3*4");
/// let y = calc
///     .set_variable("i", i)
///     .evaluate("-3.5*cos(i*5)+pi*(-2+sqrt(i*pi^2))/3");
/// assert!(y.is_finite());
/// ```
///
/// Compile once and re-evaluate with changing bindings:
///
/// ```
/// use evalix_rs::Calculator;
///
/// let mut calc = Calculator::new();
/// let compiled = calc.compile("x^2 + 1");
/// let mut total = 0.0;
/// for x in 0..4 {
///     total += calc.set_variable("x", x as f64).evaluate_postfix(&compiled);
/// }
/// assert_eq!(total, 18.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    symbols: SymbolTable,
}

impl Calculator {
    /// A calculator seeded with the default constants and functions.
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::new())
    }

    /// A calculator without any predefined names.
    pub fn empty() -> Self {
        Self::with_symbols(SymbolTable::empty())
    }

    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.symbols.set_variable(name, value);
        self
    }

    pub fn set_function<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.symbols.set_function(name, function);
        self
    }

    pub fn tokenize(&self, expression: &str) -> Vec<Token> {
        token::tokenize(expression)
    }

    pub fn to_postfix(&self, infix: &[Token]) -> Vec<Token> {
        token::to_postfix(infix)
    }

    /// Tokenizes and converts `expression` into a reusable postfix sequence.
    /// Unbalanced parentheses compile to an empty sequence.
    pub fn compile(&self, expression: &str) -> Vec<Token> {
        token::to_postfix(&token::tokenize(expression))
    }

    pub fn evaluate(&self, expression: &str) -> f64 {
        self.evaluate_postfix(&self.compile(expression))
    }

    pub fn evaluate_postfix(&self, postfix: &[Token]) -> f64 {
        evaluator::evaluate(postfix, &self.symbols)
    }

    /// Evaluates one compiled sequence against many sets of variable
    /// bindings in parallel. Each row shadows the calculator's variables for
    /// that evaluation only.
    pub fn evaluate_batch(&self, postfix: &[Token], rows: &[HashMap<String, f64>]) -> Vec<f64> {
        rows.par_iter()
            .map(|row| evaluator::evaluate(postfix, &Overlay::new(&self.symbols, row)))
            .collect()
    }

    pub fn try_tokenize(&self, expression: &str) -> Result<Vec<Token>, CalcError> {
        token::try_tokenize(expression)
    }

    pub fn try_to_postfix(&self, infix: &[Token]) -> Result<Vec<Token>, CalcError> {
        token::try_to_postfix(infix)
    }

    pub fn try_compile(&self, expression: &str) -> Result<Vec<Token>, CalcError> {
        token::try_to_postfix(&token::try_tokenize(expression)?)
    }

    pub fn try_evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        self.try_evaluate_postfix(&self.try_compile(expression)?)
    }

    pub fn try_evaluate_postfix(&self, postfix: &[Token]) -> Result<f64, CalcError> {
        evaluator::try_evaluate(postfix, &self.symbols)
    }
}
