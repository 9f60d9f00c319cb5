// SPDX-License-Identifier: Unlicense
//! Errors raised by the parser and the evaluator.
//!
//! Positions are zero-based indices into the token sequence handed to
//! [`crate::parser::parse`].

use std::fmt;

use crate::{ast::Operator, dialect::Dialect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// There was no token where an expression had to start.
    UnexpectedEndOfInput { position: usize },
    /// An operator was the last token, so it has nothing to apply to.
    MissingOperands { operator: Operator, position: usize },
    /// The token is all digits but does not fit in an `i64`.
    MalformedNumber { token: String, position: usize },
    /// The token is neither a number nor an operator of the dialect.
    UnknownToken {
        token: String,
        position: usize,
        dialect: Dialect,
    },
    /// Tokens remained after the root expression was complete.
    TrailingTokens { token: String, position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::MissingOperands { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::UnknownToken { position, .. }
            | Self::TrailingTokens { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "token {position}: unexpected end of input, expected an expression")
            }
            Self::MissingOperands { operator, position } => write!(
                f,
                "token {position}: operator `{}` has no operands",
                operator.keyword()
            ),
            Self::MalformedNumber { token, position } => {
                write!(f, "token {position}: `{token}` is not a valid integer")
            }
            Self::UnknownToken {
                token,
                position,
                dialect,
            } => write!(
                f,
                "token {position}: `{token}` is neither a number nor a {dialect} operator"
            ),
            Self::TrailingTokens { token, position } => write!(
                f,
                "token {position}: unexpected `{token}` after the end of the expression"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero,
    Overflow { operator: Operator },
    /// `sub` or `div` reached with no operands. The parser never builds
    /// such a node.
    EmptyOperation { operator: Operator },
    /// An id did not resolve in the arena it was evaluated against.
    DanglingNode,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::Overflow { operator } => {
                write!(f, "integer overflow in `{}`", operator.keyword())
            }
            Self::EmptyOperation { operator } => {
                write!(f, "`{}` applied to no operands", operator.keyword())
            }
            Self::DanglingNode => f.write_str("failed to get ast node from arena"),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_should_name_token_and_position() {
        let e = ParseError::MalformedNumber {
            token: "99999999999999999999".into(),
            position: 3,
        };
        assert_eq!(e.position(), 3);
        assert_eq!(
            e.to_string(),
            "token 3: `99999999999999999999` is not a valid integer"
        );
    }

    #[test]
    fn unknown_token_message_should_name_dialect() {
        let e = ParseError::UnknownToken {
            token: "+".into(),
            position: 0,
            dialect: Dialect::Word,
        };
        assert_eq!(e.to_string(), "token 0: `+` is neither a number nor a word operator");
    }
}
