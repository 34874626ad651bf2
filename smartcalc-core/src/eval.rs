use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::CalcError;
use crate::lexer::OpKind;
use crate::postfix::Postfix;
use crate::stack::Stack;

/// The largest power result, in bits, when nothing else is configured.
/// This is a bit more than 315 000 decimal digits.
pub const DEFAULT_MAX_POWER_BITS: u64 = 1 << 20;

/// Limits applied while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// A power whose result may need more bits than this fails with
    /// [`CalcError::ArithmeticOverflow`].
    pub max_power_bits: u64,
}

impl Default for EvalConfig {
    fn default() -> EvalConfig {
        EvalConfig {
            max_power_bits: DEFAULT_MAX_POWER_BITS,
        }
    }
}

fn pow(base: BigInt, exp: BigInt, config: &EvalConfig) -> Result<BigInt, CalcError> {
    // these never grow, whatever the exponent
    if base.is_zero() {
        return if exp.is_negative() {
            Err(CalcError::DivisionByZero)
        } else if exp.is_zero() {
            Ok(One::one())
        } else {
            Ok(Zero::zero())
        };
    }
    if base.abs().is_one() {
        return Ok(if base.is_negative() && exp.is_odd() {
            -BigInt::one()
        } else {
            One::one()
        });
    }

    // 1 / base^n truncates to zero when |base| > 1
    if exp.is_negative() {
        return Ok(Zero::zero());
    }

    let exp = exp.to_u32().ok_or(CalcError::ArithmeticOverflow)?;

    // |base|^exp needs at most this many bits
    let max_bits = base.bits().saturating_mul(u64::from(exp));
    if max_bits > config.max_power_bits {
        return Err(CalcError::ArithmeticOverflow);
    }

    Ok(base.pow(exp))
}

/// Computes `left op right`.
fn apply(
    op: OpKind,
    left: BigInt,
    right: BigInt,
    config: &EvalConfig,
) -> Result<BigInt, CalcError> {
    Ok(match op {
        OpKind::Add => left + right,
        OpKind::Sub => left - right,
        OpKind::Mul => left * right,
        OpKind::Div => {
            if right.is_zero() {
                return Err(CalcError::DivisionByZero);
            }

            // truncates toward zero
            left / right
        }
        OpKind::Pow => pow(left, right, config)?,
    })
}

/// Evaluates a postfix expression.
///
/// The operand pushed first is the left-hand side, so `8 3 -` is `5`. If the
/// expression does not leave exactly one value on the stack, it was malformed
/// and [`CalcError::InvalidExpression`] is returned.
pub fn eval_postfix(items: Vec<Postfix>, config: &EvalConfig) -> Result<BigInt, CalcError> {
    let mut stack = Stack::with_capacity(items.len());

    for item in items {
        match item {
            Postfix::Num(val) => stack.push(val),
            Postfix::Op(op) => {
                let right = stack.pop().ok_or(CalcError::InvalidExpression)?;
                let left = stack.pop().ok_or(CalcError::InvalidExpression)?;
                trace!("{} {} {}", left, op, right);
                stack.push(apply(op, left, right, config)?);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(CalcError::InvalidExpression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(val: i64) -> Postfix {
        Postfix::Num(val.into())
    }

    fn op(c: char) -> Postfix {
        Postfix::Op(OpKind::from_char(c).unwrap())
    }

    fn eval(items: Vec<Postfix>) -> Result<BigInt, CalcError> {
        eval_postfix(items, &EvalConfig::default())
    }

    #[test]
    fn it_uses_the_first_operand_as_the_left_hand_side() {
        assert_eq!(eval(vec![num(10), num(4), op('-')]), Ok(6.into()));
        assert_eq!(eval(vec![num(10), num(4), op('/')]), Ok(2.into()));
        assert_eq!(eval(vec![num(2), num(10), op('^')]), Ok(1024.into()));
    }

    #[test]
    fn it_truncates_divisions_toward_zero() {
        assert_eq!(eval(vec![num(-7), num(2), op('/')]), Ok((-3).into()));
        assert_eq!(eval(vec![num(7), num(-2), op('/')]), Ok((-3).into()));
    }

    #[test]
    fn it_rejects_division_by_zero() {
        assert_eq!(
            eval(vec![num(4), num(0), op('/')]),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn it_does_not_overflow_machine_integers() {
        let result = eval(vec![num(i64::MAX), num(i64::MAX), op('*')]).unwrap();
        assert_eq!(result, BigInt::from(i64::MAX) * BigInt::from(i64::MAX));

        let result = eval(vec![num(2), num(100), op('^')]).unwrap();
        assert_eq!(result.to_string(), "1267650600228229401496703205376");
    }

    #[test]
    fn it_handles_special_powers() {
        assert_eq!(eval(vec![num(0), num(0), op('^')]), Ok(1.into()));
        assert_eq!(eval(vec![num(0), num(5), op('^')]), Ok(0.into()));
        assert_eq!(eval(vec![num(-1), num(3), op('^')]), Ok((-1).into()));
        assert_eq!(eval(vec![num(-1), num(-4), op('^')]), Ok(1.into()));
        assert_eq!(eval(vec![num(2), num(-1), op('^')]), Ok(0.into()));
        assert_eq!(
            eval(vec![num(0), num(-1), op('^')]),
            Err(CalcError::DivisionByZero)
        );
        // trivial bases never overflow
        assert_eq!(eval(vec![num(1), num(i64::MAX), op('^')]), Ok(1.into()));
    }

    #[test]
    fn it_rejects_powers_that_are_too_big() {
        assert_eq!(
            eval(vec![num(2), num(i64::MAX), op('^')]),
            Err(CalcError::ArithmeticOverflow)
        );
        assert_eq!(
            eval(vec![num(10), num(1_000_000), op('^')]),
            Err(CalcError::ArithmeticOverflow)
        );

        // 2 needs two bits, so 2^n is estimated at 2n bits
        let config = EvalConfig { max_power_bits: 16 };
        assert_eq!(
            eval_postfix(vec![num(2), num(7), op('^')], &config),
            Ok(128.into())
        );
        assert_eq!(
            eval_postfix(vec![num(2), num(9), op('^')], &config),
            Err(CalcError::ArithmeticOverflow)
        );
    }

    #[test]
    fn it_rejects_malformed_expressions() {
        assert_eq!(eval(vec![]), Err(CalcError::InvalidExpression));
        assert_eq!(eval(vec![num(1), num(2)]), Err(CalcError::InvalidExpression));
        assert_eq!(eval(vec![num(1), op('+')]), Err(CalcError::InvalidExpression));
    }
}
