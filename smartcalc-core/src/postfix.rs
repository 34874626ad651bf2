//! Infix to postfix conversion with the shunting-yard algorithm.
//!
//! An operator pops every operator on the stack that has the same or a higher
//! precedence before it is pushed. This makes every operator, `^` included,
//! group from left to right: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.

use std::fmt;

use log::trace;
use num_bigint::BigInt;

use crate::error::CalcError;
use crate::infix::Infix;
use crate::lexer::OpKind;
use crate::stack::Stack;

/// An item of a postfix (reverse Polish) expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postfix {
    Num(BigInt),
    Op(OpKind),
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postfix::Num(val) => write!(f, "{}", val),
            Postfix::Op(op) => write!(f, "{}", op),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackItem {
    Op(OpKind),
    OpenParen,
}

/// Converts `items` to postfix order.
///
/// Fails with [`CalcError::InvalidExpression`] if a `)` has no matching `(`
/// or a `(` is never closed.
pub fn to_postfix(items: Vec<Infix>) -> Result<Vec<Postfix>, CalcError> {
    let mut output = Vec::with_capacity(items.len());
    let mut stack = Stack::with_capacity(items.len());

    for item in items {
        match item {
            Infix::Num(val) => output.push(Postfix::Num(val)),

            Infix::Op(op) => {
                while let Some(StackItem::Op(top)) = stack.peek() {
                    if top.precedence() < op.precedence() {
                        break;
                    }

                    output.push(Postfix::Op(*top));
                    stack.pop();
                }

                stack.push(StackItem::Op(op));
            }

            Infix::OpenParen => stack.push(StackItem::OpenParen),

            Infix::CloseParen => loop {
                match stack.pop() {
                    Some(StackItem::Op(op)) => output.push(Postfix::Op(op)),
                    Some(StackItem::OpenParen) => break,
                    None => return Err(CalcError::InvalidExpression),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            StackItem::Op(op) => output.push(Postfix::Op(op)),
            StackItem::OpenParen => return Err(CalcError::InvalidExpression),
        }
    }

    if log::log_enabled!(log::Level::Trace) {
        let rendered: Vec<String> = output.iter().map(|p| p.to_string()).collect();
        trace!("postfix: {}", rendered.join(" "));
    }

    Ok(output)
}
