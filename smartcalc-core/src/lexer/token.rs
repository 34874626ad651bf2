use num_bigint::BigInt;

use std::fmt;

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OpKind {
    pub fn from_char(c: char) -> Option<OpKind> {
        Some(match c {
            '+' => OpKind::Add,
            '-' => OpKind::Sub,
            '*' => OpKind::Mul,
            '/' => OpKind::Div,
            '^' => OpKind::Pow,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            OpKind::Add => '+',
            OpKind::Sub => '-',
            OpKind::Mul => '*',
            OpKind::Div => '/',
            OpKind::Pow => '^',
        }
    }

    /// The binding power of the operator. A higher value binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::Add | OpKind::Sub => 1,
            OpKind::Mul | OpKind::Div => 2,
            OpKind::Pow => 3,
        }
    }

    /// Whether the operator is `+` or `-`, which can also be used as a sign.
    pub fn is_sign(self) -> bool {
        matches!(self, OpKind::Add | OpKind::Sub)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Tokens are simple things like numbers, operators, parentheses, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Num(BigInt),
    Ident(String),
    Op(OpKind),
    OpenParen,
    CloseParen,
    Equals,
}

impl TokenKind {
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        if let Some(op) = OpKind::from_char(c) {
            return Some(TokenKind::Op(op));
        }

        Some(match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '=' => TokenKind::Equals,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The index of the first character of the token
    pub index: usize,

    /// The number of bytes the token spans in the input
    pub len: usize,
}

impl Token {
    /// The index one past the last character of the token
    pub fn end(&self) -> usize {
        self.index + self.len
    }
}
