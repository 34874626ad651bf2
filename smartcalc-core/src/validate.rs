//! Classifies a line before anything is evaluated.
//!
//! The checks run in a fixed order and the first failing one decides the
//! error, so a line with several problems always reports the same one.

use log::trace;

use crate::error::CalcError;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::store::is_identifier;

/// What a line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,

    /// `lhs = rhs`, where `lhs` is an identifier and `rhs` is an identifier
    /// or a signed integer. Both sides are trimmed.
    Assignment { lhs: &'a str, rhs: &'a str },

    /// The tokens of an expression that passed the lexical checks.
    Expression(Vec<Token>),
}

/// Returns true if `s` is made of letters and digits and has both, like `a1`
/// or `2b`.
fn mixes_letters_and_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
        && s.bytes().any(|b| b.is_ascii_alphabetic())
        && s.bytes().any(|b| b.is_ascii_digit())
}

/// Returns true if `s` is an optional `+` or `-` followed by decimal digits.
pub(crate) fn is_signed_integer(s: &str) -> bool {
    let digits = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn classify_assignment(line: &str) -> Result<Line, CalcError> {
    if line.matches('=').count() > 1 {
        return Err(CalcError::InvalidAssignment);
    }

    let (lhs, rhs) = match line.find('=') {
        Some(i) => (line[..i].trim(), line[i + 1..].trim()),
        None => return Err(CalcError::InvalidAssignment),
    };

    if mixes_letters_and_digits(lhs) {
        return Err(CalcError::InvalidIdentifier);
    }

    if is_identifier(lhs) && (is_identifier(rhs) || is_signed_integer(rhs)) {
        Ok(Line::Assignment { lhs, rhs })
    } else {
        Err(CalcError::InvalidAssignment)
    }
}

fn check_adjacent_operands(tokens: &[Token]) -> Result<(), CalcError> {
    for pair in tokens.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        let touches = left.end() == right.index;

        match (&left.kind, &right.kind) {
            // two bare numbers with only whitespace between them
            (TokenKind::Num(_), TokenKind::Num(_)) => return Err(CalcError::InvalidIdentifier),

            (TokenKind::Ident(_), TokenKind::Num(_)) | (TokenKind::Num(_), TokenKind::Ident(_))
                if touches =>
            {
                return Err(CalcError::InvalidIdentifier)
            }

            _ => {}
        }
    }

    Ok(())
}

fn classify_expression(line: &str) -> Result<Line, CalcError> {
    // dangling operators
    if line.starts_with(|c: char| matches!(c, '*' | '/' | '^'))
        || line.ends_with(|c: char| matches!(c, '+' | '-' | '^'))
    {
        return Err(CalcError::InvalidExpression);
    }

    let tokens = tokenize(line)?;
    check_adjacent_operands(&tokens)?;

    let opened = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::OpenParen)
        .count();
    let closed = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::CloseParen)
        .count();
    if opened != closed {
        return Err(CalcError::InvalidExpression);
    }

    Ok(Line::Expression(tokens))
}

/// Decides whether `line` is blank, an assignment, or an expression, and
/// rejects it if it is malformed.
pub fn classify(line: &str) -> Result<Line, CalcError> {
    let line = line.trim();
    trace!("classifying {:?}", line);

    if line.is_empty() {
        Ok(Line::Blank)
    } else if line.contains('=') {
        classify_assignment(line)
    } else {
        classify_expression(line)
    }
}
