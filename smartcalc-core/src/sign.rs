//! Folding of `+` and `-` runs.
//!
//! `5 - - 2` is `5 + 2` and `5 + - + 2` is `5 - 2`: a run of signs becomes
//! one operator, `-` if the run holds an odd number of minuses and `+`
//! otherwise.
//!
//! After folding, a sign with no operand on its left (at the start, after `(`
//! or after another operator) is unary. Unary signs are applied right away so
//! the converter only ever sees binary operators:
//! - before a number, the sign becomes part of the number;
//! - `+` before `(` is dropped;
//! - `-` before `(` turns `-(x)` into `(0 - (x))`.

use std::iter::Peekable;

use log::trace;

use crate::infix::Infix;
use crate::lexer::OpKind;

/// Consumes the run of signs starting at the next item and returns the
/// folded sign, or `None` if the next item is not a sign.
fn fold_run<I>(items: &mut Peekable<I>) -> Option<OpKind>
where
    I: Iterator<Item = Infix>,
{
    let mut minus_count = 0;
    let mut is_run = false;

    while let Some(Infix::Op(op)) = items.peek() {
        if !op.is_sign() {
            break;
        }

        if *op == OpKind::Sub {
            minus_count += 1;
        }
        is_run = true;
        items.next();
    }

    if !is_run {
        None
    } else if minus_count % 2 == 1 {
        Some(OpKind::Sub)
    } else {
        Some(OpKind::Add)
    }
}

/// Folds every run of signs and applies unary signs.
pub fn normalize(items: Vec<Infix>) -> Vec<Infix> {
    let mut result = Vec::with_capacity(items.len() + 4);
    let mut items = items.into_iter().peekable();

    // parenthesis depth of `result`, and the depths at which a `(0 - ...`
    // group must be closed
    let mut depth: usize = 0;
    let mut pending_closes: Vec<usize> = Vec::new();

    loop {
        if let Some(sign) = fold_run(&mut items) {
            let is_unary = match result.last() {
                None | Some(Infix::OpenParen) | Some(Infix::Op(_)) => true,
                Some(Infix::Num(_)) | Some(Infix::CloseParen) => false,
            };

            if !is_unary {
                result.push(Infix::Op(sign));
                continue;
            }

            let next_is_num = matches!(items.peek(), Some(Infix::Num(_)));
            let next_is_group = matches!(items.peek(), Some(Infix::OpenParen));

            if next_is_num {
                if let Some(Infix::Num(val)) = items.next() {
                    result.push(Infix::Num(if sign == OpKind::Sub { -val } else { val }));
                }
            } else if next_is_group && sign == OpKind::Sub {
                result.push(Infix::OpenParen);
                result.push(Infix::Num(0.into()));
                result.push(Infix::Op(OpKind::Sub));
                depth += 1;

                // the group itself opens one level deeper
                pending_closes.push(depth + 1);
            } else if !next_is_group {
                // nothing to apply the sign to, the converter or the
                // evaluator will reject the expression
                result.push(Infix::Op(sign));
            }

            continue;
        }

        let item = match items.next() {
            Some(item) => item,
            None => break,
        };

        match item {
            Infix::OpenParen => {
                depth += 1;
                result.push(Infix::OpenParen);
            }
            Infix::CloseParen => {
                result.push(Infix::CloseParen);
                if pending_closes.last() == Some(&depth) {
                    pending_closes.pop();
                    result.push(Infix::CloseParen);
                    depth -= 1;
                }
                // misordered parentheses are rejected by the converter
                depth = depth.saturating_sub(1);
            }
            item => result.push(item),
        }
    }

    trace!("normalized signs: {:?}", result);
    result
}
