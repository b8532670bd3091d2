//! Terms: a real coefficient times a monomial.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::monomial::Monomial;

/// Magnitude below which a coefficient is treated as exactly zero.
///
/// Every zero test in the workspace goes through [`is_near_zero`].
pub const EPSILON: f64 = 1e-10;

/// Decimal places kept when hashing coefficients.
const HASH_DECIMALS: i32 = 6;

/// Returns true if `c` is within [`EPSILON`] of zero.
#[must_use]
pub fn is_near_zero(c: f64) -> bool {
    c.abs() < EPSILON
}

/// Rounds a coefficient so that values differing by float jitter hash alike.
pub(crate) fn hash_key(c: f64) -> i64 {
    let scale = 10f64.powi(HASH_DECIMALS);
    let rounded = (c * scale).round();
    // Normalize -0.0 to 0 so both signs of zero hash alike.
    if rounded == 0.0 {
        0
    } else {
        rounded as i64
    }
}

/// A coefficient paired with a monomial.
///
/// A term whose coefficient is near zero is stored as the canonical zero
/// term (coefficient 0, identity monomial).
#[derive(Clone)]
pub struct Term {
    coefficient: f64,
    monomial: Monomial,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub fn new(coefficient: f64, monomial: Monomial) -> Self {
        if is_near_zero(coefficient) {
            return Self::zero();
        }
        Self {
            coefficient,
            monomial,
        }
    }

    /// Creates the canonical zero term.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coefficient: 0.0,
            monomial: Monomial::one(),
        }
    }

    /// Creates a constant term.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(c, Monomial::one())
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the monomial.
    #[must_use]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// Returns true if the coefficient is near zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_near_zero(self.coefficient)
    }

    /// Returns true if this is the constant term 1.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        is_near_zero(self.coefficient - 1.0) && self.monomial.is_one()
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coefficient: -self.coefficient,
            monomial: self.monomial.clone(),
        }
    }

    /// Multiplies the coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.coefficient * scalar, self.monomial.clone())
    }

    /// Multiplies the monomial by another monomial.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial) -> Self {
        Self::new(self.coefficient, self.monomial.mul(m))
    }

    /// Multiplies two terms.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.coefficient * other.coefficient,
            self.monomial.mul(&other.monomial),
        )
    }

    /// Formats the term without its sign, as used after a `+`/`-` joiner.
    pub(crate) fn fmt_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coefficient.abs();
        if self.monomial.is_one() {
            write!(f, "{c}")
        } else if is_near_zero(c - 1.0) {
            write!(f, "{}", self.monomial)
        } else {
            write!(f, "{c}{}", self.monomial)
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        is_near_zero(self.coefficient - other.coefficient) && self.monomial == other.monomial
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(self.coefficient).hash(state);
        self.monomial.hash(state);
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.coefficient < 0.0 {
            write!(f, "-")?;
        }
        self.fmt_magnitude(f)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}*{}", self.coefficient, self.monomial)
    }
}
