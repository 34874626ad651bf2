use log::debug;
use num_bigint::BigInt;

use crate::error::CalcError;
use crate::store::{is_identifier, VariableStore};
use crate::validate::is_signed_integer;

/// Parses an optional sign followed by decimal digits.
fn parse_signed_integer(s: &str) -> Option<BigInt> {
    if !is_signed_integer(s) {
        return None;
    }

    let (is_negative, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let val: BigInt = digits.parse().ok()?;

    Some(if is_negative { -val } else { val })
}

/// Runs `lhs = rhs`.
///
/// If `rhs` is an identifier, its current value is copied. Otherwise `rhs`
/// must be a signed integer. On error the store is left as it was.
pub fn assign(lhs: &str, rhs: &str, store: &mut VariableStore) -> Result<(), CalcError> {
    let val = if is_identifier(rhs) {
        store.get(rhs).cloned().ok_or(CalcError::UnknownVariable)?
    } else {
        parse_signed_integer(rhs).ok_or(CalcError::InvalidAssignment)?
    };

    debug!("{} = {}", lhs, val);
    store
        .set(lhs, val)
        .map_err(|_| CalcError::InvalidIdentifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_stores_integers() {
        let mut store = VariableStore::new();
        assign("a", "5", &mut store).unwrap();
        assign("b", "-12", &mut store).unwrap();
        assign("c", "+7", &mut store).unwrap();
        assert_eq!(store.get("a"), Some(&BigInt::from(5)));
        assert_eq!(store.get("b"), Some(&BigInt::from(-12)));
        assert_eq!(store.get("c"), Some(&BigInt::from(7)));
    }

    #[test]
    fn it_stores_big_integers() {
        let digits = "-98765432109876543210987654321";
        let mut store = VariableStore::new();
        assign("big", digits, &mut store).unwrap();
        assert_eq!(store.get("big").unwrap().to_string(), digits);
    }

    #[test]
    fn it_copies_other_variables() {
        let mut store = VariableStore::new();
        assign("a", "5", &mut store).unwrap();
        assign("b", "a", &mut store).unwrap();
        assign("a", "6", &mut store).unwrap();

        // the copy does not follow later changes
        assert_eq!(store.get("a"), Some(&BigInt::from(6)));
        assert_eq!(store.get("b"), Some(&BigInt::from(5)));
    }

    #[test]
    fn it_leaves_the_store_alone_on_unknown_variables() {
        let mut store = VariableStore::new();
        assign("a", "1", &mut store).unwrap();
        assert_eq!(
            assign("a", "missing", &mut store),
            Err(CalcError::UnknownVariable)
        );
        assert_eq!(store.get("a"), Some(&BigInt::from(1)));
        assert!(!store.contains("missing"));
    }

    #[test]
    fn it_rejects_other_right_hand_sides() {
        let mut store = VariableStore::new();
        assert_eq!(
            assign("a", "1_000", &mut store),
            Err(CalcError::InvalidAssignment)
        );
        assert_eq!(
            assign("a1", "1", &mut store),
            Err(CalcError::InvalidIdentifier)
        );
        assert!(store.is_empty());
    }
}
