//! polyterm-math - Sparse single-variable polynomials
//!
//! This crate provides a polynomial container over integer coefficients:
//! - [`Polynomial`] keeps its non-zero terms sorted by decreasing exponent
//! - Merge-based addition and subtraction, pairwise multiplication
//! - Evaluation at a real point with domain checking
//!
//! # Examples
//!
//! ```
//! use polyterm_math::Polynomial;
//!
//! let mut p = Polynomial::new();
//! p.insert_term(3, 2);
//! p.insert_term(2, 2);
//! assert_eq!(p.display(), "5x^2");
//!
//! let q: Polynomial = [(1, 2), (-1, 0)].into_iter().collect();
//! let r = &p * &q;
//! assert_eq!(r.display(), "5x^4-5x^2");
//! assert_eq!(r.evaluate(1.0), Ok(0.0));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod polynomial;

pub use error::{PolyError, PolyResult};
pub use polynomial::{Coeff, Exp, Polynomial, Term};
