//! Menu state: the primary polynomial, the pending operand and the
//! actions the menu can select.

use polyterm_math::{PolyResult, Polynomial};
use tracing::debug;

/// A menu entry, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 0. Exit
    Exit,
    /// 1. Insert term(s) into the primary polynomial
    InsertTerms,
    /// 2. Display the primary polynomial
    Display,
    /// 3-5. Combine the primary polynomial with a fresh operand
    Binary(BinaryOp),
    /// 6. Evaluate the primary polynomial
    Evaluate,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::InsertTerms),
            2 => Ok(MenuChoice::Display),
            3 => Ok(MenuChoice::Binary(BinaryOp::Add)),
            4 => Ok(MenuChoice::Binary(BinaryOp::Subtract)),
            5 => Ok(MenuChoice::Binary(BinaryOp::Multiply)),
            6 => Ok(MenuChoice::Evaluate),
            other => Err(other),
        }
    }
}

/// Arithmetic offered on the primary polynomial and an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Primary + operand
    Add,
    /// Primary - operand
    Subtract,
    /// Primary * operand
    Multiply,
}

impl BinaryOp {
    /// Heading printed before the operand is read.
    pub fn title(self) -> &'static str {
        match self {
            BinaryOp::Add => "Adding Polynomials",
            BinaryOp::Subtract => "Subtracting Polynomials",
            BinaryOp::Multiply => "Multiplying Polynomials",
        }
    }

    /// Label printed above the result.
    pub fn result_label(self) -> &'static str {
        match self {
            BinaryOp::Add => "Sum of Polynomials",
            BinaryOp::Subtract => "Difference of Polynomials",
            BinaryOp::Multiply => "Product of Polynomials",
        }
    }
}

/// Which polynomial a term entry goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The polynomial shown, evaluated and used as left operand
    Primary,
    /// The right operand of the pending binary operation
    Operand,
}

impl Target {
    /// Ordinal used in the "how many terms" prompt.
    pub fn ordinal(self) -> &'static str {
        match self {
            Target::Primary => "first",
            Target::Operand => "second",
        }
    }
}

/// The two polynomials a menu session works with.
#[derive(Debug, Default)]
pub struct Session {
    primary: Polynomial,
    operand: Polynomial,
}

impl Session {
    /// Create a session with both polynomials empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The primary polynomial.
    pub fn primary(&self) -> &Polynomial {
        &self.primary
    }

    /// The pending operand.
    pub fn operand(&self) -> &Polynomial {
        &self.operand
    }

    /// Insert a term into `target`.
    pub fn insert(&mut self, target: Target, coeff: i32, exp: i32) -> PolyResult<()> {
        let poly = match target {
            Target::Primary => &mut self.primary,
            Target::Operand => &mut self.operand,
        };
        poly.try_insert_term(i64::from(coeff), exp)
    }

    /// Combine the primary polynomial with the operand.
    pub fn apply(&self, op: BinaryOp) -> PolyResult<Polynomial> {
        let result = match op {
            BinaryOp::Add => self.primary.checked_add(&self.operand),
            BinaryOp::Subtract => self.primary.checked_subtract(&self.operand),
            BinaryOp::Multiply => self.primary.checked_multiply(&self.operand),
        }?;
        debug!(?op, terms = result.num_terms(), "applied operation");
        Ok(result)
    }

    /// Drop the operand once its operation is done.
    pub fn clear_operand(&mut self) {
        self.operand.clear();
    }

    /// Evaluate the primary polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> PolyResult<f64> {
        self.primary.evaluate(x)
    }

    /// Release both polynomials.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.operand.clear();
    }
}
