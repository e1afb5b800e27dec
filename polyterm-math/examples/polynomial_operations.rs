//! # Polynomial Operations Example
//!
//! This example demonstrates polynomial arithmetic and evaluation.
//! It covers:
//! - Building polynomials term by term (like terms merge on insertion)
//! - Addition, subtraction and multiplication
//! - Evaluation, including the zero-base domain error
//!
//! ## See Also
//! - [`Polynomial`](polyterm_math::Polynomial)

use polyterm_math::{PolyError, Polynomial};

fn main() -> Result<(), PolyError> {
    println!("=== polyterm: Polynomial Operations ===\n");

    let mut p1 = Polynomial::new();
    p1.insert_term(1, 2);
    p1.insert_term(1, 0);

    let mut p2 = Polynomial::new();
    p2.try_insert_term(1, 2)?;
    p2.try_insert_term(-1, 0)?;

    println!("p1      = {}", p1);
    println!("p2      = {}", p2);
    println!("p1 + p2 = {}", p1.checked_add(&p2)?);
    println!("p1 - p2 = {}", p1.checked_subtract(&p2)?);
    println!("p1 * p2 = {}", p1.checked_multiply(&p2)?);

    let cubic: Polynomial = [(2, 3), (-1, 1), (5, 0)].into_iter().collect();
    println!("\n{} at x = 2: {}", cubic, cubic.evaluate(2.0)?);

    let reciprocal: Polynomial = [(1, -1)].into_iter().collect();
    match reciprocal.evaluate(0.0) {
        Ok(v) => println!("{} at x = 0: {}", reciprocal, v),
        Err(e) => println!("{} at x = 0: {}", reciprocal, e),
    }

    Ok(())
}
