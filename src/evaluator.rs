use crate::error::CalcError;
use crate::symbols::Symbols;
use crate::token::{Operator, Token};
use log::debug;

/// Runs a postfix sequence on an operand stack.
///
/// An empty sequence is zero. Identifiers resolve to a function first, then
/// to a variable, and otherwise to zero. A missing operand reads as zero and
/// the result is whatever value ends up on top of the stack.
pub fn evaluate<S>(postfix: &[Token], symbols: &S) -> f64
where
    S: Symbols + ?Sized,
{
    // Lenient runs have no error path.
    StackMachine::new(symbols, false)
        .run(postfix)
        .unwrap_or_default()
}

/// Same as [`evaluate`], but unresolved identifiers, stack underflow,
/// separators and leftover operands are errors.
pub fn try_evaluate<S>(postfix: &[Token], symbols: &S) -> Result<f64, CalcError>
where
    S: Symbols + ?Sized,
{
    StackMachine::new(symbols, true).run(postfix)
}

struct StackMachine<'a, S: ?Sized> {
    symbols: &'a S,
    stack: Vec<f64>,
    strict: bool,
}

impl<'a, S> StackMachine<'a, S>
where
    S: Symbols + ?Sized,
{
    fn new(symbols: &'a S, strict: bool) -> Self {
        Self {
            symbols,
            stack: Vec::new(),
            strict,
        }
    }

    fn run(mut self, postfix: &[Token]) -> Result<f64, CalcError> {
        if postfix.is_empty() {
            return Ok(0.0);
        }
        self.stack.reserve(postfix.len());

        for token in postfix {
            match token {
                Token::Number(value) => self.stack.push(*value),

                Token::Operator(Operator::Negate) => {
                    let value = self.pop(token)?;
                    self.stack.push(-value);
                }

                Token::Operator(operator) => self.binary_op(token, |left, right| {
                    operator.apply(left, right)
                })?,

                Token::Identifier(name) => self.resolve(token, name)?,

                Token::Separator(separator) => {
                    if self.strict {
                        return Err(CalcError::UnexpectedSeparator(separator.symbol()));
                    }
                    debug!("Ignoring separator '{}' in postfix sequence", separator);
                }
            }
        }

        self.finish()
    }

    fn resolve(&mut self, token: &Token, name: &str) -> Result<(), CalcError> {
        let symbols = self.symbols;

        if let Some(function) = symbols.function(name) {
            let argument = self.pop(token)?;
            self.stack.push(function(argument));
        } else if let Some(value) = symbols.variable(name) {
            self.stack.push(value);
        } else if self.strict {
            return Err(CalcError::UnresolvedIdentifier(name.to_string()));
        } else {
            debug!("Unresolved identifier '{}' evaluates to 0", name);
            self.stack.push(0.0);
        }

        Ok(())
    }

    fn binary_op<F>(&mut self, token: &Token, op: F) -> Result<(), CalcError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (right, left) = (self.pop(token)?, self.pop(token)?);
        self.stack.push(op(left, right));
        Ok(())
    }

    fn pop(&mut self, token: &Token) -> Result<f64, CalcError> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None if self.strict => Err(CalcError::StackUnderflow(token.to_string())),
            None => Ok(0.0),
        }
    }

    fn finish(self) -> Result<f64, CalcError> {
        if self.strict && self.stack.len() != 1 {
            return Err(CalcError::LeftoverOperands(self.stack.len()));
        }
        Ok(self.stack.last().copied().unwrap_or(0.0))
    }
}
