use num_bigint::BigInt;
use proptest::prelude::*;
use smartcalc::{process, Outcome, VariableStore};

const OPS: [char; 3] = ['+', '-', '*'];

/// Evaluates `nums[0] ops[0] nums[1] ...`, doing products before sums.
fn reference(nums: &[u64], ops: &[char]) -> BigInt {
    let mut sum = BigInt::from(0);
    let mut term = BigInt::from(nums[0]);
    let mut sign = 1;

    for (op, num) in ops.iter().zip(&nums[1..]) {
        match op {
            '*' => term *= *num,
            _ => {
                sum += term * sign;
                term = BigInt::from(*num);
                sign = if *op == '-' { -1 } else { 1 };
            }
        }
    }

    sum + term * sign
}

fn chain() -> impl Strategy<Value = (Vec<u64>, Vec<char>)> {
    (1usize..12).prop_flat_map(|len| {
        (
            proptest::collection::vec(any::<u64>(), len + 1),
            proptest::collection::vec(proptest::sample::select(OPS.to_vec()), len),
        )
    })
}

proptest! {
    #[test]
    fn it_agrees_with_a_reference_evaluator((nums, ops) in chain()) {
        let mut line = nums[0].to_string();
        for (op, num) in ops.iter().zip(&nums[1..]) {
            line.push_str(&format!(" {} {}", op, num));
        }

        let mut store = VariableStore::new();
        prop_assert_eq!(process(&line, &mut store), Outcome::Printed(reference(&nums, &ops)));
    }

    #[test]
    fn it_never_panics_on_printable_input(line in "[ -~]{0,40}") {
        let mut store = VariableStore::new();
        let _ = process(&line, &mut store);
    }

    #[test]
    fn it_never_changes_the_store_on_errors(line in "[a-c0-9 =+*/^()-]{0,24}") {
        let mut store = VariableStore::new();
        store.set("a", BigInt::from(2)).unwrap();
        let before = store.clone();

        if let Outcome::Error(_) = process(&line, &mut store) {
            prop_assert_eq!(store, before);
        }
    }
}
