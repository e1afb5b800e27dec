//! Error types for polynomial arithmetic and evaluation.

use thiserror::Error;

use crate::polynomial::{Coeff, Exp};

/// Error type for polynomial operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Evaluating `0^e` with a negative exponent
    #[error("cannot evaluate x^{exponent} at x = 0: negative power of zero")]
    ZeroToNegativePower {
        /// The offending exponent
        exponent: Exp,
    },
    /// A coefficient sum or product left the representable range
    #[error("coefficient overflow at exponent {exponent}")]
    CoefficientOverflow {
        /// Exponent of the term whose coefficient overflowed
        exponent: Exp,
    },
    /// An exponent sum left the representable range
    #[error("exponent overflow: {lhs} + {rhs}")]
    ExponentOverflow {
        /// Exponent of the left factor
        lhs: Exp,
        /// Exponent of the right factor
        rhs: Exp,
    },
}

impl PolyError {
    /// Build an overflow error for a coefficient update at `exponent`.
    pub(crate) fn coefficient_overflow(exponent: Exp) -> Self {
        PolyError::CoefficientOverflow { exponent }
    }
}

/// Result type for polynomial operations
pub type PolyResult<T> = Result<T, PolyError>;

/// Checked coefficient product, reported at the exponent it lands on.
pub(crate) fn checked_coeff_mul(a: Coeff, b: Coeff, exponent: Exp) -> PolyResult<Coeff> {
    a.checked_mul(b)
        .ok_or_else(|| PolyError::coefficient_overflow(exponent))
}
