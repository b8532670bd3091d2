//! # Buchberger
//!
//! Reduced Gröbner bases of multivariate polynomial systems over the reals.
//!
//! ## Features
//!
//! - **Named Variables**: Sparse monomials over string-named variables
//! - **Pluggable Orderings**: Any [`MonomialOrdering`](poly::MonomialOrdering), lexicographic built in
//! - **Buchberger's Algorithm**: Saturation plus fixed-point inter-reduction
//! - **Verification**: Parallel check of Buchberger's criterion
//!
//! ## Quick Start
//!
//! ```rust
//! use buchberger::prelude::*;
//!
//! let order = Lex::new(["x", "y"]);
//! let x = Polynomial::var("x");
//! let y = Polynomial::var("y");
//!
//! // x^2 - y, xy - 1
//! let f = &(&x * &x) - &y;
//! let g = &(&x * &y) - &Polynomial::constant(1.0);
//!
//! let basis = groebner_basis(vec![f, g], &order);
//! assert!(is_groebner_basis(&basis, &order));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use buchberger_groebner as groebner;
pub use buchberger_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use buchberger_groebner::{
        groebner_basis, groebner_basis_with_config, is_groebner_basis, reduce, s_polynomial,
        Buchberger, BuchbergerConfig, GroebnerError,
    };
    pub use buchberger_poly::{Lex, Monomial, MonomialOrdering, Polynomial, Term, Variable};
}
