//! Monomials over named variables.
//!
//! A monomial is a product of variable powers without a coefficient. It is
//! stored as a name-sorted list of `(variable, exponent)` pairs with all
//! exponents strictly positive, so that structural equality coincides with
//! mathematical equality.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::variable::Variable;

/// Inline capacity for exponent storage. Most monomials in practice
/// involve only a handful of variables.
const INLINE_VARS: usize = 4;

type Exponents = SmallVec<[(Variable, u32); INLINE_VARS]>;

/// An immutable monomial, the product of variables raised to positive powers.
///
/// The identity monomial `1` has no stored exponents.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    /// Exponents sorted by variable name, never zero.
    exponents: Exponents,
}

impl Monomial {
    /// Creates a monomial from `(variable, exponent)` pairs.
    ///
    /// Zero exponents are dropped. A variable listed more than once has
    /// its exponents summed.
    #[must_use]
    pub fn new<V, I>(exponents: I) -> Self
    where
        V: Into<Variable>,
        I: IntoIterator<Item = (V, u32)>,
    {
        let mut exps: Exponents = exponents
            .into_iter()
            .filter(|(_, e)| *e > 0)
            .map(|(v, e)| (v.into(), e))
            .collect();
        exps.sort_by(|a, b| a.0.cmp(&b.0));

        let mut merged: Exponents = SmallVec::with_capacity(exps.len());
        for (var, e) in exps {
            match merged.last_mut() {
                Some((last, acc)) if *last == var => *acc = acc.saturating_add(e),
                _ => merged.push((var, e)),
            }
        }

        Self { exponents: merged }
    }

    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial consisting of a single variable.
    #[must_use]
    pub fn var(var: impl Into<Variable>) -> Self {
        Self::new([(var.into(), 1)])
    }

    /// Returns the exponent of a variable, 0 if it does not occur.
    #[must_use]
    pub fn exponent(&self, var: &Variable) -> u32 {
        self.exponents
            .binary_search_by(|(v, _)| v.cmp(var))
            .map_or(0, |i| self.exponents[i].1)
    }

    /// Returns the stored `(variable, exponent)` pairs in name order.
    #[must_use]
    pub fn exponents(&self) -> &[(Variable, u32)] {
        &self.exponents
    }

    /// Iterates over the variables with positive exponent, in name order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.exponents.iter().map(|(v, _)| v)
    }

    /// Returns the total degree (sum of exponents), saturating at `u32::MAX`.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.exponents
            .iter()
            .fold(0u32, |acc, (_, e)| acc.saturating_add(*e))
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Multiplies two monomials.
    ///
    /// Exponents saturate at `u32::MAX` instead of overflowing.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.merge_with(other, |a, b| Some(a.saturating_add(b)))
            .unwrap_or_default()
    }

    /// Divides this monomial by another.
    ///
    /// Returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        self.merge_with(other, |a, b| a.checked_sub(b))
    }

    /// Checks if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .all(|(v, e)| other.exponent(v) >= *e)
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        self.merge_with(other, |a, b| Some(a.max(b)))
            .unwrap_or_default()
    }

    /// Combines the exponents of both monomials variable by variable.
    ///
    /// `op` receives the exponents of `self` and `other` (0 when absent)
    /// and returns `None` to abort the whole merge.
    fn merge_with(&self, other: &Self, op: impl Fn(u32, u32) -> Option<u32>) -> Option<Self> {
        let mut out: Exponents = SmallVec::with_capacity(self.exponents.len() + other.exponents.len());
        let mut lhs = self.exponents.iter().peekable();
        let mut rhs = other.exponents.iter().peekable();

        loop {
            let (var, e) = match (lhs.peek(), rhs.peek()) {
                (None, None) => break,
                (Some((va, ea)), None) => {
                    let r = (va.clone(), op(*ea, 0)?);
                    lhs.next();
                    r
                }
                (None, Some((vb, eb))) => {
                    let r = (vb.clone(), op(0, *eb)?);
                    rhs.next();
                    r
                }
                (Some((va, ea)), Some((vb, eb))) => match va.cmp(vb) {
                    Ordering::Less => {
                        let r = (va.clone(), op(*ea, 0)?);
                        lhs.next();
                        r
                    }
                    Ordering::Greater => {
                        let r = (vb.clone(), op(0, *eb)?);
                        rhs.next();
                        r
                    }
                    Ordering::Equal => {
                        let r = (va.clone(), op(*ea, *eb)?);
                        lhs.next();
                        rhs.next();
                        r
                    }
                },
            };
            if e > 0 {
                out.push((var, e));
            }
        }

        Some(Self { exponents: out })
    }
}

/// Canonical storage order: total degree first, then exponents compared
/// over the name-sorted union of variables.
///
/// This order only makes polynomial storage deterministic. It is not a
/// monomial ordering in the Gröbner sense; use a
/// [`MonomialOrdering`](crate::ordering::MonomialOrdering) for that.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.degree().cmp(&other.degree()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let mut lhs = self.exponents.iter().peekable();
        let mut rhs = other.exponents.iter().peekable();
        loop {
            match (lhs.peek(), rhs.peek()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((va, ea)), Some((vb, eb))) => match va.cmp(vb) {
                    // `va` is absent from `other`, so its exponent there is 0.
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => match ea.cmp(eb) {
                        Ordering::Equal => {
                            lhs.next();
                            rhs.next();
                        }
                        ord => return ord,
                    },
                },
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (var, e) in &self.exponents {
            if *e == 1 {
                write!(f, "{var}")?;
            } else {
                write!(f, "{var}^{e}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({self})")
    }
}
