//! Monomial orderings for polynomial operations.
//!
//! The choice of monomial ordering determines leading terms and therefore
//! the result of division and Gröbner basis computation.

use std::cmp::Ordering;
use std::fmt;

use crate::monomial::Monomial;
use crate::variable::Variable;

/// A total order on monomials, parameterized by a variable priority list.
///
/// Implementations compare only the variables they were built from.
/// Variables outside [`variables`](Self::variables) are ignored, so two
/// monomials differing only in such variables compare equal. Callers must
/// supply a priority list covering every variable in play; otherwise the
/// order silently degenerates.
pub trait MonomialOrdering {
    /// Compares two monomials.
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering;

    /// Returns the variable priority list, highest priority first.
    fn variables(&self) -> &[Variable];

    /// Returns a short name for the ordering.
    fn name(&self) -> &'static str;

    /// Returns true if every variable of `m` appears in the priority list.
    fn is_covering(&self, m: &Monomial) -> bool {
        m.variables().all(|v| self.variables().contains(v))
    }
}

impl<O: MonomialOrdering + ?Sized> MonomialOrdering for &O {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        (**self).compare(a, b)
    }

    fn variables(&self) -> &[Variable] {
        (**self).variables()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Lexicographic order.
///
/// With priority `x > y > z`, `x^a y^b z^c > x^d y^e z^f` iff the first
/// nonzero difference `(a-d, b-e, c-f)` is positive.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Lex {
    variables: Vec<Variable>,
}

impl Lex {
    /// Creates a lexicographic order from variables listed highest first.
    #[must_use]
    pub fn new<V, I>(variables: I) -> Self
    where
        V: Into<Variable>,
        I: IntoIterator<Item = V>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

impl MonomialOrdering for Lex {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        for var in &self.variables {
            match a.exponent(var).cmp(&b.exponent(var)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn name(&self) -> &'static str {
        "lex"
    }
}

impl fmt::Display for Lex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, var) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{var}")?;
        }
        write!(f, ")")
    }
}
