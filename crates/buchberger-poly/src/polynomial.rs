//! Sparse multivariate polynomials with real coefficients.
//!
//! Every constructor and arithmetic operation routes its output through a
//! single normalization step that combines like terms, drops near-zero
//! coefficients and sorts terms in the canonical monomial storage order.
//! Two polynomials are therefore equal iff their stored term lists are.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;
use rustc_hash::{FxHashMap, FxHasher};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrdering;
use crate::term::{is_near_zero, Term};
use crate::variable::Variable;

/// An immutable sparse polynomial.
///
/// Terms have pairwise distinct monomials, non-zero coefficients, and are
/// sorted by descending [`Monomial`] storage order. That order is
/// independent of any [`MonomialOrdering`]; leading terms are always
/// computed against an ordering supplied by the caller.
#[derive(Clone, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms sharing a monomial are summed and near-zero sums dropped.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        Self {
            terms: normalize(terms),
        }
    }

    /// Creates a polynomial from `(coefficient, monomial)` pairs.
    #[must_use]
    pub fn new<I: IntoIterator<Item = (f64, Monomial)>>(terms: I) -> Self {
        Self::from_terms(terms.into_iter().map(|(c, m)| Term::new(c, m)))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::from_terms([Term::constant(c)])
    }

    /// Creates the polynomial consisting of a single variable.
    #[must_use]
    pub fn var(var: impl Into<Variable>) -> Self {
        Self::from_terms([Term::new(1.0, Monomial::var(var))])
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in canonical storage order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Computes the total degree, 0 for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial().degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns the distinct variables occurring in the polynomial, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: Vec<Variable> = self
            .terms
            .iter()
            .flat_map(|t| t.monomial().variables().cloned())
            .collect();
        vars.sort();
        vars.dedup();
        vars
    }

    /// Returns the term with maximal monomial under `order`, if non-zero.
    ///
    /// If the order ties distinct monomials, the first in storage order wins.
    pub fn leading<O: MonomialOrdering + ?Sized>(&self, order: &O) -> Option<&Term> {
        self.terms.iter().reduce(|best, t| {
            if order.compare(t.monomial(), best.monomial()) == Ordering::Greater {
                t
            } else {
                best
            }
        })
    }

    /// Returns the leading term under `order`.
    ///
    /// The zero polynomial yields the canonical zero term.
    #[must_use]
    pub fn leading_term<O: MonomialOrdering + ?Sized>(&self, order: &O) -> Term {
        self.leading(order).cloned().unwrap_or_else(Term::zero)
    }

    /// Returns the leading monomial under `order`, `1` for the zero polynomial.
    #[must_use]
    pub fn leading_monomial<O: MonomialOrdering + ?Sized>(&self, order: &O) -> Monomial {
        self.leading(order)
            .map_or_else(Monomial::one, |t| t.monomial().clone())
    }

    /// Returns the leading coefficient under `order`, 0 for the zero polynomial.
    #[must_use]
    pub fn leading_coefficient<O: MonomialOrdering + ?Sized>(&self, order: &O) -> f64 {
        self.leading(order).map_or(0.0, Term::coefficient)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_terms(self.terms.iter().chain(&other.terms).cloned())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .cloned()
                .chain(other.terms.iter().map(Term::neg)),
        )
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::neg).collect(),
        }
    }

    /// Multiplies by a scalar.
    ///
    /// Only the products are tested against the zero threshold, so a
    /// scalar of any magnitude is applied as given.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self::from_terms(self.terms.iter().map(|t| t.scale(c)))
    }

    /// Multiplies every term by `c·m`.
    ///
    /// Unlike [`mul_term`](Self::mul_term), the multiplier is never built as
    /// a [`Term`], so a `c` below the zero threshold still takes effect on
    /// terms whose products survive it.
    #[must_use]
    pub fn mul_scaled_monomial(&self, c: f64, m: &Monomial) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(t.coefficient() * c, t.monomial().mul(m))),
        )
    }

    /// Multiplies every term by `term`.
    #[must_use]
    pub fn mul_term(&self, term: &Term) -> Self {
        Self::from_terms(self.terms.iter().map(|t| t.mul(term)))
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                terms.push(t1.mul(t2));
            }
        }

        Self::from_terms(terms)
    }
}

/// Combines like terms, drops near-zero coefficients and sorts descending.
fn normalize<I: IntoIterator<Item = Term>>(terms: I) -> Vec<Term> {
    let mut combined: FxHashMap<Monomial, f64> = FxHashMap::default();
    for term in terms {
        if term.is_zero() {
            continue;
        }
        *combined.entry(term.monomial().clone()).or_insert(0.0) += term.coefficient();
    }

    let mut result: Vec<Term> = combined
        .into_iter()
        .filter(|(_, c)| !is_near_zero(*c))
        .map(|(m, c)| Term::new(c, m))
        .collect();

    result.sort_by(|a, b| b.monomial().cmp(a.monomial()));
    result
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sum = self.terms.iter().fold(0u64, |acc, t| {
            let mut h = FxHasher::default();
            t.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        sum.hash(state);
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms([term])
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.terms.split_first() else {
            return write!(f, "0");
        };

        write!(f, "{first}")?;
        for term in rest {
            if term.coefficient() > 0.0 {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }
            term.fmt_magnitude(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.terms).finish()
    }
}
