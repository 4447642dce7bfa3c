use crate::error::CalcError;
use crate::token::{Operator, Separator, Token};
use log::debug;
use std::iter::Peekable;
use std::str::CharIndices;

/// Scans an expression into infix tokens.
///
/// Never fails: unrecognized characters are skipped, and so is a number
/// literal with no numeric prefix at all (a lone `.`).
pub fn tokenize(expression: &str) -> Vec<Token> {
    // The lenient scanner has no error path.
    Tokenizer::new(expression, false)
        .run()
        .unwrap_or_default()
}

/// Same as [`tokenize`], but rejects unrecognized characters and malformed
/// number literals instead of skipping them.
pub fn try_tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    Tokenizer::new(expression, true).run()
}

struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    strict: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str, strict: bool) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            strict,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, CalcError> {
        let mut tokens = Vec::new();

        while let Some((position, ch)) = self.chars.next() {
            if let Ok(operator) = Operator::try_from(ch) {
                tokens.push(Token::Operator(operator));
            } else if let Ok(separator) = Separator::try_from(ch) {
                tokens.push(Token::Separator(separator));
            } else if ch.is_ascii_digit() || ch == '.' {
                if let Some(number) = self.read_number(position)? {
                    tokens.push(number);
                }
            } else if ch.is_ascii_alphabetic() {
                tokens.push(self.read_identifier(position));
            } else if !ch.is_whitespace() {
                if self.strict {
                    return Err(CalcError::UnexpectedCharacter {
                        character: ch,
                        position,
                    });
                }
                debug!("Skipping unrecognized character {:?} at {}", ch, position);
            }
        }

        Ok(tokens)
    }

    /// Consumes the rest of a number literal starting at `start`. A `-` only
    /// continues the literal directly after an exponent marker.
    fn read_number(&mut self, start: usize) -> Result<Option<Token>, CalcError> {
        let mut end = start + 1;
        let mut previous = '\0';

        while let Some(&(position, ch)) = self.chars.peek() {
            let continues = ch.is_ascii_digit()
                || matches!(ch, '.' | 'e' | 'E')
                || (ch == '-' && matches!(previous, 'e' | 'E'));
            if !continues {
                break;
            }
            previous = ch;
            end = position + 1;
            self.chars.next();
        }

        let text = &self.input[start..end];
        if let Ok(value) = text.parse::<f64>() {
            return Ok(Some(Token::Number(value)));
        }
        if self.strict {
            return Err(CalcError::InvalidNumber(text.to_string()));
        }

        match parse_longest_prefix(text) {
            Some(value) => Ok(Some(Token::Number(value))),
            None => {
                debug!("Dropping number literal without digits: {:?}", text);
                Ok(None)
            }
        }
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        let mut end = start + 1;
        while let Some(&(position, ch)) = self.chars.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            end = position + 1;
            self.chars.next();
        }
        Token::Identifier(self.input[start..end].to_string())
    }
}

/// `strtod`-style parse: the longest leading slice that is a valid float.
/// Literal text is ASCII only, so every byte offset is a char boundary.
fn parse_longest_prefix(text: &str) -> Option<f64> {
    (1..=text.len())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(operator: Operator) -> Token {
        Token::Operator(operator)
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_simple_arithmetic() {
        assert_eq!(
            tokenize("2+3*4"),
            vec![
                number(2.0),
                op(Operator::Add),
                number(3.0),
                op(Operator::Multiply),
                number(4.0)
            ]
        );
    }

    #[test]
    fn test_minus_is_never_part_of_a_number() {
        assert_eq!(
            tokenize("-3"),
            vec![op(Operator::Subtract), number(3.0)]
        );
        assert_eq!(
            tokenize("3- -2"),
            vec![
                number(3.0),
                op(Operator::Subtract),
                op(Operator::Subtract),
                number(2.0)
            ]
        );
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(tokenize("1e-5"), vec![number(1e-5)]);
        assert_eq!(tokenize("2.5E3"), vec![number(2500.0)]);
        assert_eq!(tokenize("2.5E-3"), vec![number(0.0025)]);
        assert_eq!(
            tokenize("1e5-2"),
            vec![number(1e5), op(Operator::Subtract), number(2.0)]
        );
    }

    #[test]
    fn test_minus_after_exponent_marker_is_absorbed() {
        // `2e-` parses by prefix and the `-` never becomes an operator.
        assert_eq!(tokenize("2e-x"), vec![number(2.0), ident("x")]);
        assert_eq!(tokenize("2E-x"), vec![number(2.0), ident("x")]);
    }

    #[test]
    fn test_plus_does_not_continue_an_exponent() {
        // `1e` parses by prefix, then `+5` is a separate addition.
        assert_eq!(
            tokenize("1e+5"),
            vec![number(1.0), op(Operator::Add), number(5.0)]
        );
    }

    #[test]
    fn test_malformed_literals_parse_by_prefix() {
        assert_eq!(tokenize("1.2.3"), vec![number(1.2)]);
        assert_eq!(tokenize(".5"), vec![number(0.5)]);
        assert_eq!(tokenize("7."), vec![number(7.0)]);
        assert!(tokenize(".").is_empty());
    }

    #[test]
    fn test_identifiers_and_calls() {
        assert_eq!(
            tokenize("sqrt(x2 * pi)"),
            vec![
                ident("sqrt"),
                Token::Separator(Separator::Open),
                ident("x2"),
                op(Operator::Multiply),
                ident("pi"),
                Token::Separator(Separator::Close),
            ]
        );
    }

    #[test]
    fn test_underscore_splits_identifiers() {
        assert_eq!(tokenize("my_var"), vec![ident("my"), ident("var")]);
    }

    #[test]
    fn test_number_followed_by_identifier() {
        assert_eq!(tokenize("2x"), vec![number(2.0), ident("x")]);
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        assert_eq!(
            tokenize("2 $+ #3 @"),
            vec![number(2.0), op(Operator::Add), number(3.0)]
        );
    }

    #[test]
    fn test_strict_rejects_unrecognized_character() {
        assert_eq!(
            try_tokenize("2 + $3"),
            Err(CalcError::UnexpectedCharacter {
                character: '$',
                position: 4
            })
        );
    }

    #[test]
    fn test_strict_rejects_malformed_literal() {
        assert_eq!(
            try_tokenize("1.2.3 + 1"),
            Err(CalcError::InvalidNumber("1.2.3".to_string()))
        );
        assert_eq!(
            try_tokenize("1e"),
            Err(CalcError::InvalidNumber("1e".to_string()))
        );
    }

    #[test]
    fn test_strict_accepts_well_formed_input() {
        assert_eq!(try_tokenize("  2 * x ").unwrap(), tokenize("2*x"));
    }
}
