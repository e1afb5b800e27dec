//! Sparse single-variable polynomials.
//!
//! A [`Polynomial`] stores only its non-zero terms, sorted by strictly
//! decreasing exponent, with at most one term per exponent. Every mutation
//! goes through [`Polynomial::try_insert_term`], which finds the slot for the
//! exponent, merges like terms and drops terms whose coefficient cancels to
//! zero, so the ordering holds after every public operation.
//!
//! Exponents may be negative; evaluation then uses real exponentiation and
//! reports `0^-k` as [`PolyError::ZeroToNegativePower`].

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::{debug, trace};

use crate::error::{PolyError, PolyResult, checked_coeff_mul};

/// Coefficient type of a term.
pub type Coeff = i64;

/// Exponent type of a term.
pub type Exp = i32;

/// A single term `coeff * x^exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// The coefficient. Never zero for a term stored in a polynomial.
    pub coeff: Coeff,
    /// The exponent of `x`.
    pub exp: Exp,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: Coeff, exp: Exp) -> Self {
        Self { coeff, exp }
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff == 0
    }

    /// Evaluate `coeff * x^exp`.
    pub fn evaluate(&self, x: f64) -> PolyResult<f64> {
        if x == 0.0 && self.exp < 0 {
            return Err(PolyError::ZeroToNegativePower { exponent: self.exp });
        }
        Ok(self.coeff as f64 * x.powi(self.exp))
    }
}

impl From<(Coeff, Exp)> for Term {
    fn from((coeff, exp): (Coeff, Exp)) -> Self {
        Term::new(coeff, exp)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^{}", self.coeff, self.exp)
    }
}

/// How the right-hand side of a merge scan contributes to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeOp {
    Add,
    Subtract,
}

impl MergeOp {
    /// Coefficient emitted for a term present only on the right.
    fn rhs_only(self, coeff: Coeff, exp: Exp) -> PolyResult<Coeff> {
        match self {
            MergeOp::Add => Ok(coeff),
            MergeOp::Subtract => coeff
                .checked_neg()
                .ok_or_else(|| PolyError::coefficient_overflow(exp)),
        }
    }

    /// Coefficient emitted where both sides carry the exponent.
    fn combine(self, lhs: Coeff, rhs: Coeff, exp: Exp) -> PolyResult<Coeff> {
        let combined = match self {
            MergeOp::Add => lhs.checked_add(rhs),
            MergeOp::Subtract => lhs.checked_sub(rhs),
        };
        combined.ok_or_else(|| PolyError::coefficient_overflow(exp))
    }
}

/// A sparse polynomial in one variable with integer coefficients.
///
/// Terms are kept in strictly decreasing exponent order, each exponent
/// occurs at most once and no stored coefficient is zero. The empty
/// polynomial is the zero polynomial.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Term>", into = "Vec<Term>")
)]
pub struct Polynomial {
    /// Terms in strictly decreasing exponent order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create the zero polynomial.
    #[inline]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create a polynomial from terms, merging like terms.
    ///
    /// # Panics
    ///
    /// Panics if merging two coefficients overflows.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut poly = Self::new();
        poly.extend(terms);
        poly
    }

    /// Create a polynomial from terms, reporting coefficient overflow.
    pub fn try_from_terms(terms: impl IntoIterator<Item = Term>) -> PolyResult<Self> {
        let mut poly = Self::new();
        for term in terms {
            poly.try_insert_term(term.coeff, term.exp)?;
        }
        Ok(poly)
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get the number of terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Get the terms, highest exponent first.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Highest exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<Exp> {
        self.terms.first().map(|t| t.exp)
    }

    /// Get the leading term.
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Coefficient of `x^exp`, zero when no such term exists.
    pub fn coeff(&self, exp: Exp) -> Coeff {
        match self.position(exp) {
            Ok(i) => self.terms[i].coeff,
            Err(_) => 0,
        }
    }

    /// Locate `exp`: `Ok(i)` if stored at `i`, `Err(i)` for the slot that
    /// keeps the descending order.
    fn position(&self, exp: Exp) -> Result<usize, usize> {
        self.terms.binary_search_by(|t| exp.cmp(&t.exp))
    }

    /// Add `coeff * x^exp` to the polynomial.
    ///
    /// A zero coefficient is ignored. If a term with the same exponent
    /// already exists the coefficients are summed and the term is removed
    /// when the sum is zero. On error the polynomial is left unchanged.
    pub fn try_insert_term(&mut self, coeff: Coeff, exp: Exp) -> PolyResult<()> {
        if coeff == 0 {
            return Ok(());
        }

        match self.position(exp) {
            Ok(i) => {
                let sum = self.terms[i]
                    .coeff
                    .checked_add(coeff)
                    .ok_or_else(|| PolyError::coefficient_overflow(exp))?;
                if sum == 0 {
                    trace!(exp, "term cancelled");
                    self.terms.remove(i);
                } else {
                    self.terms[i].coeff = sum;
                }
            }
            Err(i) => self.terms.insert(i, Term::new(coeff, exp)),
        }
        Ok(())
    }

    /// Add `coeff * x^exp` to the polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the merged coefficient overflows. Use
    /// [`try_insert_term`](Self::try_insert_term) to handle that case.
    pub fn insert_term(&mut self, coeff: Coeff, exp: Exp) {
        if let Err(e) = self.try_insert_term(coeff, exp) {
            panic!("{e}");
        }
    }

    /// Remove every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Render the polynomial, see the [`Display`](fmt::Display) impl.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Merge scan over both descending term lists.
    fn merge(&self, other: &Polynomial, op: MergeOp) -> PolyResult<Polynomial> {
        let mut result = Polynomial::new();
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let (coeff, exp) = match (lhs.peek().copied(), rhs.peek().copied()) {
                (None, None) => break,
                (Some(l), None) => {
                    lhs.next();
                    (l.coeff, l.exp)
                }
                (None, Some(r)) => {
                    rhs.next();
                    (op.rhs_only(r.coeff, r.exp)?, r.exp)
                }
                (Some(l), Some(r)) => match l.exp.cmp(&r.exp) {
                    Ordering::Greater => {
                        lhs.next();
                        (l.coeff, l.exp)
                    }
                    Ordering::Less => {
                        rhs.next();
                        (op.rhs_only(r.coeff, r.exp)?, r.exp)
                    }
                    Ordering::Equal => {
                        lhs.next();
                        rhs.next();
                        (op.combine(l.coeff, r.coeff, l.exp)?, l.exp)
                    }
                },
            };
            result.try_insert_term(coeff, exp)?;
        }

        Ok(result)
    }

    /// Add two polynomials, reporting coefficient overflow.
    pub fn checked_add(&self, other: &Polynomial) -> PolyResult<Polynomial> {
        let result = self.merge(other, MergeOp::Add)?;
        debug!(
            lhs = self.num_terms(),
            rhs = other.num_terms(),
            result = result.num_terms(),
            "added polynomials"
        );
        Ok(result)
    }

    /// Subtract `other` from `self`, reporting coefficient overflow.
    pub fn checked_subtract(&self, other: &Polynomial) -> PolyResult<Polynomial> {
        let result = self.merge(other, MergeOp::Subtract)?;
        debug!(
            lhs = self.num_terms(),
            rhs = other.num_terms(),
            result = result.num_terms(),
            "subtracted polynomials"
        );
        Ok(result)
    }

    /// Multiply two polynomials, reporting coefficient or exponent overflow.
    ///
    /// Every pair of terms contributes one product term; like exponents
    /// coalesce on insertion. Overflow is checked on the running
    /// coefficient, so a sum that overflows midway is reported even if
    /// later products would bring it back in range.
    pub fn checked_multiply(&self, other: &Polynomial) -> PolyResult<Polynomial> {
        let mut result = Polynomial::new();
        for l in &self.terms {
            for r in &other.terms {
                let exp = l
                    .exp
                    .checked_add(r.exp)
                    .ok_or(PolyError::ExponentOverflow {
                        lhs: l.exp,
                        rhs: r.exp,
                    })?;
                let coeff = checked_coeff_mul(l.coeff, r.coeff, exp)?;
                result.try_insert_term(coeff, exp)?;
            }
        }
        debug!(
            lhs = self.num_terms(),
            rhs = other.num_terms(),
            result = result.num_terms(),
            "multiplied polynomials"
        );
        Ok(result)
    }

    /// Add two polynomials.
    ///
    /// # Panics
    ///
    /// Panics on coefficient overflow.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        self.checked_add(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Subtract `other` from `self`.
    ///
    /// # Panics
    ///
    /// Panics on coefficient overflow.
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.checked_subtract(other)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Multiply two polynomials.
    ///
    /// # Panics
    ///
    /// Panics on coefficient or exponent overflow.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        self.checked_multiply(other)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Negate the polynomial.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient is `Coeff::MIN`.
    pub fn negate(&self) -> Polynomial {
        Polynomial::new().subtract(self)
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> PolyResult<f64> {
        self.terms
            .iter()
            .try_fold(0.0, |acc, t| Ok(acc + t.evaluate(x)?))
    }

    /// Check the storage invariants: strictly decreasing exponents and no
    /// zero coefficients.
    pub fn check_invariants(&self) -> bool {
        self.terms.iter().all(|t| !t.is_zero())
            && self.terms.windows(2).all(|w| w[0].exp > w[1].exp)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.terms.iter().map(|t| (t.coeff, t.exp)))
            .finish()
    }
}

/// Terms are written as `{coeff}x^{exp}`. Terms after the first get a
/// `" + "` separator only when their coefficient is positive; a negative
/// coefficient follows the previous term directly, e.g. `1x^2-1x^0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 && term.coeff > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.insert_term(term.coeff, term.exp);
        }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Polynomial::from_terms(iter)
    }
}

impl FromIterator<(Coeff, Exp)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Coeff, Exp)>>(iter: I) -> Self {
        Polynomial::from_terms(iter.into_iter().map(Term::from))
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl TryFrom<Vec<Term>> for Polynomial {
    type Error = PolyError;

    fn try_from(terms: Vec<Term>) -> PolyResult<Self> {
        Polynomial::try_from_terms(terms)
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(poly: Polynomial) -> Self {
        poly.terms
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial {
            terms: vec![Term::new(1, 0)],
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::negate(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::negate(self)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::subtract(&self, &rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::subtract(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::multiply(&self, &rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(terms: &[(Coeff, Exp)]) -> Polynomial {
        terms.iter().copied().collect()
    }

    fn pairs(p: &Polynomial) -> Vec<(Coeff, Exp)> {
        p.terms().iter().map(|t| (t.coeff, t.exp)).collect()
    }

    #[test]
    fn test_polynomial_zero() {
        let p = Polynomial::new();
        assert!(p.is_zero());
        assert_eq!(p.num_terms(), 0);
        assert_eq!(p.degree(), None);
        assert_eq!(p.display(), "0");
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut p = Polynomial::new();
        p.insert_term(1, 0);
        p.insert_term(4, 3);
        p.insert_term(-2, -1);
        p.insert_term(7, 1);
        assert_eq!(pairs(&p), vec![(4, 3), (7, 1), (1, 0), (-2, -1)]);
        assert!(p.check_invariants());
        assert_eq!(p.degree(), Some(3));
        assert_eq!(p.leading_term(), Some(&Term::new(4, 3)));
    }

    #[test]
    fn test_insert_zero_is_noop() {
        let mut p = poly(&[(3, 2)]);
        p.insert_term(0, 2);
        p.insert_term(0, 5);
        assert_eq!(pairs(&p), vec![(3, 2)]);
    }

    #[test]
    fn test_insert_coalesces() {
        let mut p = Polynomial::new();
        p.insert_term(3, 2);
        p.insert_term(2, 2);
        assert_eq!(pairs(&p), vec![(5, 2)]);
        assert_eq!(p.display(), "5x^2");
    }

    #[test]
    fn test_insert_cancellation_removes_term() {
        let mut p = poly(&[(1, 4), (6, 2), (1, 0)]);
        p.insert_term(-6, 2);
        assert_eq!(pairs(&p), vec![(1, 4), (1, 0)]);
        assert_eq!(p.coeff(2), 0);

        p.insert_term(-1, 4);
        p.insert_term(-1, 0);
        assert!(p.is_zero());
    }

    #[test]
    fn test_coeff_lookup() {
        let p = poly(&[(2, 3), (-1, 1), (5, 0)]);
        assert_eq!(p.coeff(3), 2);
        assert_eq!(p.coeff(1), -1);
        assert_eq!(p.coeff(0), 5);
        assert_eq!(p.coeff(2), 0);
        assert_eq!(p.coeff(-7), 0);
    }

    #[test]
    fn test_display_separators() {
        assert_eq!(poly(&[(1, 2), (1, 0)]).display(), "1x^2 + 1x^0");
        // Negative terms after the first carry no separator.
        assert_eq!(poly(&[(1, 2), (-1, 0)]).display(), "1x^2-1x^0");
        assert_eq!(poly(&[(-3, 1)]).display(), "-3x^1");
        assert_eq!(
            poly(&[(-2, 5), (4, 1), (-1, -2)]).to_string(),
            "-2x^5 + 4x^1-1x^-2"
        );
    }

    #[test]
    fn test_debug_lists_pairs() {
        let p = poly(&[(2, 1), (-1, 0)]);
        assert_eq!(format!("{:?}", p), "[(2, 1), (-1, 0)]");
    }

    #[test]
    fn test_polynomial_add() {
        let p1 = poly(&[(1, 2), (1, 0)]);
        let p2 = poly(&[(1, 2), (-1, 0)]);
        assert_eq!(pairs(&Polynomial::add(&p1, &p2)), vec![(2, 2)]);
    }

    #[test]
    fn test_add_disjoint_interleaves() {
        let p = poly(&[(1, 5), (1, 1)]);
        let q = poly(&[(2, 4), (2, 0), (2, -3)]);
        let r = &p + &q;
        assert_eq!(pairs(&r), vec![(1, 5), (2, 4), (1, 1), (2, 0), (2, -3)]);
        assert!(r.check_invariants());
    }

    #[test]
    fn test_add_identity() {
        let p = poly(&[(2, 3), (-1, 1), (5, 0)]);
        assert_eq!(&p + &Polynomial::new(), p);
        assert_eq!(&Polynomial::new() + &p, p);
    }

    #[test]
    fn test_polynomial_subtract() {
        let p1 = poly(&[(1, 2), (1, 0)]);
        let p2 = poly(&[(1, 2), (-1, 0)]);
        assert_eq!(pairs(&p1.subtract(&p2)), vec![(2, 0)]);
    }

    #[test]
    fn test_subtract_negates_right_only_terms() {
        let p = poly(&[(3, 2)]);
        let q = poly(&[(4, 3), (1, 0)]);
        assert_eq!(pairs(&(&p - &q)), vec![(-4, 3), (3, 2), (-1, 0)]);
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let p = poly(&[(2, 3), (-1, 1), (5, 0)]);
        let d = &p - &p;
        assert!(d.is_zero());
        assert_eq!(d.display(), "0");
    }

    #[test]
    fn test_polynomial_multiply() {
        let p1 = poly(&[(1, 2), (1, 0)]);
        let p2 = poly(&[(1, 2), (-1, 0)]);
        // (x^2 + 1)(x^2 - 1) = x^4 - 1
        assert_eq!(pairs(&p1.multiply(&p2)), vec![(1, 4), (-1, 0)]);
    }

    #[test]
    fn test_multiply_negative_exponents() {
        let p = poly(&[(2, 1), (3, -1)]);
        let q = poly(&[(1, 1), (-1, -1)]);
        // (2x + 3/x)(x - 1/x) = 2x^2 + 1 - 3x^-2
        assert_eq!(pairs(&(&p * &q)), vec![(2, 2), (1, 0), (-3, -2)]);
    }

    #[test]
    fn test_multiply_by_zero() {
        let p = poly(&[(2, 3), (1, 0)]);
        assert!((&p * &Polynomial::new()).is_zero());
        assert!((&Polynomial::new() * &p).is_zero());
    }

    #[test]
    fn test_operations_leave_inputs_untouched() {
        let p = poly(&[(1, 2), (1, 0)]);
        let q = poly(&[(1, 2), (-1, 0)]);
        let _ = &p + &q;
        let _ = &p - &q;
        let _ = &p * &q;
        assert_eq!(pairs(&p), vec![(1, 2), (1, 0)]);
        assert_eq!(pairs(&q), vec![(1, 2), (-1, 0)]);
    }

    #[test]
    fn test_evaluate() {
        let p = poly(&[(2, 3), (-1, 1), (5, 0)]);
        assert_eq!(p.evaluate(2.0), Ok(19.0));
        assert_eq!(Polynomial::new().evaluate(3.5), Ok(0.0));
    }

    #[test]
    fn test_evaluate_negative_exponent() {
        let p = poly(&[(4, -2), (1, 0)]);
        assert_eq!(p.evaluate(2.0), Ok(2.0));
        assert_eq!(
            p.evaluate(0.0),
            Err(PolyError::ZeroToNegativePower { exponent: -2 })
        );
        assert!(poly(&[(1, -1)]).evaluate(-0.0).is_err());
    }

    #[test]
    fn test_evaluate_zero_with_constant() {
        let p = poly(&[(3, 2), (7, 0)]);
        assert_eq!(p.evaluate(0.0), Ok(7.0));
    }

    #[test]
    fn test_clear() {
        let mut p = poly(&[(2, 3), (-1, 1)]);
        p.clear();
        assert!(p.is_zero());
        assert_eq!(p.display(), "0");
        p.insert_term(1, 1);
        assert_eq!(pairs(&p), vec![(1, 1)]);
    }

    #[test]
    fn test_negate() {
        let p = poly(&[(2, 3), (-1, 1)]);
        assert_eq!(pairs(&-&p), vec![(-2, 3), (1, 1)]);
        assert_eq!(-(-p.clone()), p);
    }

    #[test]
    fn test_insert_overflow_leaves_polynomial_unchanged() {
        let mut p = poly(&[(Coeff::MAX, 1)]);
        assert_eq!(
            p.try_insert_term(1, 1),
            Err(PolyError::CoefficientOverflow { exponent: 1 })
        );
        assert_eq!(pairs(&p), vec![(Coeff::MAX, 1)]);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let big = poly(&[(Coeff::MAX, 0)]);
        assert_eq!(
            big.checked_add(&big),
            Err(PolyError::CoefficientOverflow { exponent: 0 })
        );
        assert_eq!(
            big.checked_multiply(&poly(&[(2, 3)])),
            Err(PolyError::CoefficientOverflow { exponent: 3 })
        );
        assert_eq!(
            poly(&[(Coeff::MIN, 0)]).checked_subtract(&poly(&[(1, 0)])),
            Err(PolyError::CoefficientOverflow { exponent: 0 })
        );

        let high = poly(&[(1, Exp::MAX)]);
        assert_eq!(
            high.checked_multiply(&poly(&[(1, 1)])),
            Err(PolyError::ExponentOverflow {
                lhs: Exp::MAX,
                rhs: 1
            })
        );
    }

    #[test]
    #[should_panic(expected = "coefficient overflow")]
    fn test_insert_term_panics_on_overflow() {
        let mut p = poly(&[(Coeff::MAX, 0)]);
        p.insert_term(1, 0);
    }

    #[test]
    fn test_zero_and_one() {
        let p = poly(&[(3, 2), (-1, 0)]);
        assert!(<Polynomial as Zero>::is_zero(&Polynomial::zero()));
        assert_eq!(&p * &Polynomial::one(), p);
        assert_eq!(Polynomial::one().display(), "1x^0");
    }

    #[test]
    fn test_try_from_vec() {
        let p = Polynomial::try_from(vec![Term::new(1, 0), Term::new(2, 1), Term::new(-1, 0)])
            .unwrap();
        assert_eq!(pairs(&p), vec![(2, 1)]);

        let terms: Vec<Term> = p.into();
        assert_eq!(terms, vec![Term::new(2, 1)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_renormalizes() {
        let p: Polynomial =
            serde_json::from_str(r#"[{"coeff":1,"exp":0},{"coeff":3,"exp":2},{"coeff":1,"exp":0}]"#)
                .unwrap();
        assert_eq!(pairs(&p), vec![(3, 2), (2, 0)]);

        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"coeff":3,"exp":2},{"coeff":2,"exp":0}]"#);
    }
}
