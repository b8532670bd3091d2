//! # buchberger-groebner
//!
//! Reduced Gröbner bases over the reals via Buchberger's algorithm.
//!
//! This crate provides:
//! - S-polynomials, leading-term division and monic normalization
//! - A breadth-first critical pair queue
//! - The [`Buchberger`] engine with optional caps and checks
//! - A parallel verification oracle based on Buchberger's criterion
//!
//! ## Example
//!
//! ```
//! use buchberger_groebner::groebner_basis;
//! use buchberger_poly::{Lex, Monomial, Polynomial};
//!
//! let order = Lex::new(["x"]);
//! let x = Monomial::var("x");
//! let input = vec![
//!     Polynomial::new([(1.0, x.mul(&x)), (-1.0, Monomial::one())]),
//!     Polynomial::new([(1.0, x.clone()), (-1.0, Monomial::one())]),
//! ];
//!
//! let basis = groebner_basis(input, &order);
//! assert_eq!(basis, vec![Polynomial::new([(1.0, x), (-1.0, Monomial::one())])]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod error;
pub mod operations;
pub mod pairs;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use config::BuchbergerConfig;
pub use engine::{groebner_basis, groebner_basis_with_config, reduce_basis, Buchberger};
pub use error::{GroebnerError, Result};
pub use operations::{make_monic, normal_form, reduce, reduce_with_steps, s_polynomial};
pub use pairs::{CriticalPair, PairQueue};
pub use verify::{first_failing_pair, is_groebner_basis};
