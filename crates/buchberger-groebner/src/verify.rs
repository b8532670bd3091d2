//! Gröbner basis verification via Buchberger's criterion.
//!
//! A set `G` is a Gröbner basis iff the S-polynomial of every pair of its
//! elements reduces to zero against `G`. Pairs are independent and only read
//! the candidate, so they are checked in parallel.

use buchberger_poly::{MonomialOrdering, Polynomial};
use rayon::prelude::*;

use crate::operations::{reduce, s_polynomial};

/// Returns true if `basis` is a Gröbner basis under `order`.
///
/// Zero polynomials are ignored. Fewer than two non-zero elements always
/// form a Gröbner basis.
pub fn is_groebner_basis<O>(basis: &[Polynomial], order: &O) -> bool
where
    O: MonomialOrdering + Sync + ?Sized,
{
    first_failing_pair(basis, order).is_none()
}

/// Returns the first pair whose S-polynomial does not reduce to zero.
///
/// Indices refer to `basis` after zero polynomials have been removed, and
/// pairs are ranked in row-major order.
pub fn first_failing_pair<O>(basis: &[Polynomial], order: &O) -> Option<(usize, usize)>
where
    O: MonomialOrdering + Sync + ?Sized,
{
    let candidate: Vec<&Polynomial> = basis.iter().filter(|p| !p.is_zero()).collect();
    if candidate.len() < 2 {
        return None;
    }

    let pairs: Vec<(usize, usize)> = (0..candidate.len())
        .flat_map(|i| ((i + 1)..candidate.len()).map(move |j| (i, j)))
        .collect();

    pairs.into_par_iter().find_first(|&(i, j)| {
        let s = s_polynomial(candidate[i], candidate[j], order);
        !reduce(&s, candidate.iter().copied(), order).is_zero()
    })
}
