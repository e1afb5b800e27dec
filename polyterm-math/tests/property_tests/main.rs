//! Property-based tests for polyterm-math
//!
//! This module contains property tests for:
//! - Term insertion and the storage invariants
//! - Polynomial arithmetic laws
//! - Evaluation consistency

mod polynomial_props;
