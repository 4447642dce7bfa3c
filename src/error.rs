use thiserror::Error;

/// Failures reported by the strict (`try_*`) operations. The default
/// operations never return these; they degrade silently instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unexpected character {character:?} at byte {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    /// `index` is the position of the `)` in the infix token sequence.
    #[error("Unmatched closing parenthesis at token {index}")]
    UnmatchedClosingParenthesis { index: usize },
    #[error("Identifier '{0}' is neither a variable nor a function")]
    UnresolvedIdentifier(String),
    #[error("Stack underflow while applying '{0}'")]
    StackUnderflow(String),
    #[error("Separator '{0}' in a postfix sequence")]
    UnexpectedSeparator(char),
    #[error("Evaluation finished with {0} values on the stack")]
    LeftoverOperands(usize),
}
