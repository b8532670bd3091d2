//! # buchberger-poly
//!
//! Polynomial algebra over named variables with real coefficients.
//!
//! This crate provides:
//! - Named variables and immutable monomials (multiply, divide, lcm)
//! - Pluggable monomial orderings (lexicographic)
//! - Terms and canonical sparse polynomials
//!
//! ## Numerical tolerance
//!
//! Coefficients are `f64`. Any coefficient whose magnitude falls below
//! [`EPSILON`] is treated as exactly zero, in term construction, polynomial
//! normalization and equality alike.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod term;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use ordering::{Lex, MonomialOrdering};
pub use polynomial::Polynomial;
pub use term::{is_near_zero, Term, EPSILON};
pub use variable::Variable;
