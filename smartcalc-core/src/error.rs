//! The error type shared by every stage of the line pipeline.
//!
//! Each variant is one kind of failure the user is told about. The `Display`
//! text of a variant is the exact message printed for it, so callers print
//! errors with `{}` and nothing else.

use thiserror::Error;

use crate::lexer::LexerError;

/// Everything that can go wrong while processing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Malformed use of `=`: more than one, or a right-hand side that is
    /// neither an integer nor an identifier.
    #[error("Invalid assignment")]
    InvalidAssignment,

    /// A variable name that mixes letters and digits, or letters and digits
    /// that touch inside an expression.
    #[error("Invalid identifier")]
    InvalidIdentifier,

    /// A reference to a variable that was never assigned.
    #[error("Unknown variable")]
    UnknownVariable,

    /// Structural problems: unbalanced parentheses, dangling operators,
    /// unknown characters, or operands without an operator between them.
    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Division by zero")]
    DivisionByZero,

    /// A power whose result would exceed the configured size.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<LexerError> for CalcError {
    fn from(_: LexerError) -> CalcError {
        CalcError::InvalidExpression
    }
}
