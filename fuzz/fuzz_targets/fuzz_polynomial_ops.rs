//! Fuzz target for polynomial insertion and arithmetic
//!
//! Tests that every operation keeps terms sorted, unique and non-zero

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use polyterm_math::Polynomial;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert { coeff: i16, exp: i8 },
    Add,
    Subtract,
    Multiply,
    Swap,
    Clear,
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let num_ops: u8 = match unstructured.arbitrary() {
        Ok(n) => n % 64,
        Err(_) => return,
    };

    let mut lhs = Polynomial::new();
    let mut rhs = Polynomial::new();

    for _ in 0..num_ops {
        let op: Op = match unstructured.arbitrary() {
            Ok(op) => op,
            Err(_) => break,
        };

        match op {
            Op::Insert { coeff, exp } => {
                let exp = i32::from(exp);
                let before = lhs.coeff(exp);
                if lhs.try_insert_term(i64::from(coeff), exp).is_ok() {
                    assert_eq!(lhs.coeff(exp), before + i64::from(coeff));
                } else {
                    assert_eq!(lhs.coeff(exp), before);
                }
            }
            Op::Add => {
                if let Ok(sum) = lhs.checked_add(&rhs) {
                    if let Ok(back) = sum.checked_subtract(&rhs) {
                        assert_eq!(back, lhs);
                    }
                    lhs = sum;
                }
            }
            Op::Subtract => {
                if let Ok(diff) = lhs.checked_subtract(&rhs) {
                    if let Ok(back) = diff.checked_add(&rhs) {
                        assert_eq!(back, lhs);
                    }
                    lhs = diff;
                }
            }
            // Keep the cross product small
            Op::Multiply if lhs.num_terms() * rhs.num_terms() > 4096 => {}
            Op::Multiply => {
                if let (Ok(product), Ok(flipped)) =
                    (lhs.checked_multiply(&rhs), rhs.checked_multiply(&lhs))
                {
                    assert_eq!(product, flipped);
                    lhs = product;
                }
            }
            Op::Swap => std::mem::swap(&mut lhs, &mut rhs),
            Op::Clear => lhs.clear(),
        }

        assert!(lhs.check_invariants());
        assert!(rhs.check_invariants());
        assert!((&lhs - &lhs).is_zero());
    }
});
