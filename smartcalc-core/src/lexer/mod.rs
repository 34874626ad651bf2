mod token;

use std::iter::FusedIterator;

use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

pub use self::token::*;

/// The kind of a lexer error
#[derive(Debug, PartialEq, Eq)]
pub enum LexerErrorKind {
    UnknownToken,
}

/// When the line contains a character that is not part of any token, the
/// lexer will return this error.
#[derive(Debug, PartialEq, Eq)]
pub struct LexerError {
    // The error kind
    pub kind: LexerErrorKind,

    /// The index of the first character which caused the error
    pub index: usize,
}

/// A lexer reads a line of input and returns a list of tokens in the line.
/// This allows us to read the line in a simpler way later when we want to
/// validate and convert it.
pub struct Lexer<'a> {
    expr: &'a [u8],
    index: usize,
    has_failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from a line.
    pub fn new(expr: &str) -> Lexer {
        Lexer {
            expr: expr.as_bytes(),
            index: 0,
            has_failed: false,
        }
    }

    fn consume_whitespace(&mut self) {
        while self.index < self.expr.len() {
            match self.expr[self.index] as char {
                ' ' | '\n' | '\r' | '\t' => {}
                _ => break,
            }

            self.index += 1;
        }
    }

    fn try_consume_single_char_token(&mut self) -> Option<Token> {
        if self.index < self.expr.len() {
            let original_index = self.index;
            let c = self.expr[self.index] as char;

            if let Some(kind) = TokenKind::from_single_char(c) {
                // consume the character
                self.index += 1;

                return Some(Token {
                    kind,
                    index: original_index,
                    len: 1,
                });
            }
        }

        None
    }

    fn try_consume_ident(&mut self) -> Option<Token> {
        let original_index = self.index;

        // every letter in an identifier is alphabetic
        while self.index < self.expr.len() && self.expr[self.index].is_ascii_alphabetic() {
            self.index += 1;
        }

        if self.index == original_index {
            return None;
        }

        // only ASCII letters were consumed, so this cannot fail
        let ident = String::from_utf8_lossy(&self.expr[original_index..self.index]).into_owned();
        Some(Token {
            kind: TokenKind::Ident(ident),
            index: original_index,
            len: self.index - original_index,
        })
    }

    fn try_consume_num(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut val: BigInt = Zero::zero();

        while self.index < self.expr.len() {
            let digit = match (self.expr[self.index] as char).to_digit(10) {
                Some(val) => val,
                None => break,
            };

            val *= 10u32;
            val += digit;

            self.index += 1;
        }

        if self.index == original_index {
            return None;
        }

        Some(Token {
            kind: TokenKind::Num(val),
            index: original_index,
            len: self.index - original_index,
        })
    }
}

// This means that when it returns a none option, then it will keep returning
// none options.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed {
            return None;
        }

        self.consume_whitespace();

        // is there anything left?
        if self.index >= self.expr.len() {
            return None;
        }

        let original_index = self.index;
        let maybe_token = self
            .try_consume_single_char_token()
            .or_else(|| self.try_consume_num())
            .or_else(|| self.try_consume_ident());

        if let Some(token) = &maybe_token {
            trace!("token {:?} at {}", token.kind, token.index);
        }

        Some(maybe_token.ok_or_else(|| {
            self.has_failed = true;

            // if we didn't get any token, then it is unknown
            LexerError {
                kind: LexerErrorKind::UnknownToken,
                index: original_index,
            }
        }))
    }
}

/// Reads every token of the line, stopping at the first error.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(expr).collect()
}
