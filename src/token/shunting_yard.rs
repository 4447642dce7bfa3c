use crate::error::CalcError;
use crate::token::{render, Operator, Separator, Token, FUNCTION_PRECEDENCE};
use log::{debug, warn};

/// Converts an infix token sequence into postfix order.
///
/// Unbalanced parentheses left on the stack at the end of input are reported
/// through the log and yield an empty sequence, which evaluates to zero. A
/// stray `)` simply drains the stack.
pub fn to_postfix(infix: &[Token]) -> Vec<Token> {
    match convert(infix, false) {
        Ok(postfix) => postfix,
        Err(err) => {
            warn!("{} in expression `{}`", err, render(infix));
            Vec::new()
        }
    }
}

/// Same as [`to_postfix`], but every parenthesis mismatch is an error.
pub fn try_to_postfix(infix: &[Token]) -> Result<Vec<Token>, CalcError> {
    convert(infix, true)
}

fn convert(infix: &[Token], strict: bool) -> Result<Vec<Token>, CalcError> {
    let mut output = Vec::with_capacity(infix.len());
    // Binary operators, negations, open parens and pending function names.
    let mut pending: Vec<Token> = Vec::new();

    for (index, token) in infix.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token.clone()),

            Token::Identifier(_) => {
                if infix.get(index + 1).is_some_and(Token::is_open) {
                    pending.push(token.clone());
                } else {
                    output.push(token.clone());
                }
            }

            Token::Separator(Separator::Open) => pending.push(token.clone()),

            Token::Separator(Separator::Close) => {
                let mut matched = false;
                while let Some(top) = pending.pop() {
                    if top.is_open() {
                        matched = true;
                        break;
                    }
                    output.push(top);
                }
                if !matched && strict {
                    return Err(CalcError::UnmatchedClosingParenthesis { index });
                }
            }

            Token::Operator(operator) => {
                if *operator == Operator::Negate {
                    pending.push(token.clone());
                    continue;
                }

                if is_unary_position(infix, index) {
                    match operator {
                        Operator::Subtract => {
                            pending.push(Token::Operator(Operator::Negate));
                            continue;
                        }
                        Operator::Add => continue,
                        _ => {}
                    }
                }

                while pending.last().is_some_and(|top| yields_to(top, *operator)) {
                    if let Some(top) = pending.pop() {
                        output.push(top);
                    }
                }
                pending.push(token.clone());
            }
        }
    }

    while let Some(top) = pending.pop() {
        if let Token::Separator(_) = top {
            return Err(CalcError::MismatchedParentheses);
        }
        output.push(top);
    }

    debug!("Postfix: {}", render(&output));
    Ok(output)
}

/// A sign is unary at the start of input, after another operator, or right
/// after an opening parenthesis.
fn is_unary_position(infix: &[Token], index: usize) -> bool {
    match index.checked_sub(1).and_then(|previous| infix.get(previous)) {
        None => true,
        Some(Token::Operator(_)) => true,
        Some(previous) => previous.is_open(),
    }
}

/// Whether the stack entry `top` must move to the output before `incoming`
/// is pushed. `^` is right associative, everything else is left associative.
fn yields_to(top: &Token, incoming: Operator) -> bool {
    let top_precedence = match top {
        Token::Operator(operator) => operator.precedence(),
        Token::Identifier(_) => FUNCTION_PRECEDENCE,
        Token::Separator(_) | Token::Number(_) => return false,
    };

    if incoming.is_right_associative() {
        incoming.precedence() < top_precedence
    } else {
        incoming.precedence() <= top_precedence
    }
}
