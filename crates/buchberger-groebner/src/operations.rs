//! S-polynomials, multivariate division and monic normalization.
//!
//! These are the primitives shared by the Buchberger engine and the
//! verification oracle.

use buchberger_poly::{is_near_zero, Monomial, MonomialOrdering, Polynomial};

/// Computes the S-polynomial of `f` and `g`.
///
/// With `LT(f) = c_f·m_f`, `LT(g) = c_g·m_g` and `L = lcm(m_f, m_g)`:
///
/// `S(f, g) = (L/m_f)/c_f · f − (L/m_g)/c_g · g`
///
/// Both scaled copies have leading term `1·L`, which cancels. The
/// S-polynomial involving a zero polynomial is zero.
pub fn s_polynomial<O>(f: &Polynomial, g: &Polynomial, order: &O) -> Polynomial
where
    O: MonomialOrdering + ?Sized,
{
    let (Some(lt_f), Some(lt_g)) = (f.leading(order), g.leading(order)) else {
        return Polynomial::zero();
    };

    let lcm = lt_f.monomial().lcm(lt_g.monomial());
    let (Some(mult_f), Some(mult_g)) = (lcm.div(lt_f.monomial()), lcm.div(lt_g.monomial())) else {
        return Polynomial::zero();
    };

    let scaled_f = f.mul_scaled_monomial(1.0 / lt_f.coefficient(), &mult_f);
    let scaled_g = g.mul_scaled_monomial(1.0 / lt_g.coefficient(), &mult_g);

    without_monomial(&scaled_f.sub(&scaled_g), &lcm)
}

/// Reduces `f` by `basis` (multivariate division), returning the remainder.
///
/// See [`reduce_with_steps`] for the exact reduction strategy.
pub fn reduce<'a, O, I>(f: &Polynomial, basis: I, order: &O) -> Polynomial
where
    O: MonomialOrdering + ?Sized,
    I: IntoIterator<Item = &'a Polynomial> + Clone,
{
    reduce_with_steps(f, basis, order).0
}

/// Reduces `f` by `basis` and reports the number of elimination steps.
///
/// Repeatedly takes the leading term of the remainder and scans `basis` in
/// order for the first element whose leading monomial divides it. On a
/// match the scaled divisor is subtracted and the scan restarts from the
/// beginning. Reduction stops as soon as the leading term is irreducible;
/// trailing terms are never inspected, so the remainder is not a full
/// normal form. Zero polynomials in `basis` are skipped.
///
/// Each step removes the current leading monomial outright, so the
/// remainder's leading monomial strictly decreases and the loop terminates
/// for any well-founded ordering, whatever the coefficient magnitudes.
pub fn reduce_with_steps<'a, O, I>(f: &Polynomial, basis: I, order: &O) -> (Polynomial, usize)
where
    O: MonomialOrdering + ?Sized,
    I: IntoIterator<Item = &'a Polynomial> + Clone,
{
    let mut remainder = f.clone();
    let mut steps = 0;

    'reduce: while let Some(lt) = remainder.leading(order).cloned() {
        for g in basis.clone() {
            let Some(lt_g) = g.leading(order) else {
                continue;
            };

            if let Some(quotient) = lt.monomial().div(lt_g.monomial()) {
                let factor = lt.coefficient() / lt_g.coefficient();
                let product = g.mul_scaled_monomial(factor, &quotient);
                remainder = without_monomial(&remainder.sub(&product), lt.monomial());
                steps += 1;
                continue 'reduce;
            }
        }
        break;
    }

    (remainder, steps)
}

/// Computes the full normal form of `f` with respect to `basis`.
///
/// Unlike [`reduce`], trailing terms are reduced as well: whenever the
/// leading term becomes irreducible it is moved to the result and
/// reduction continues on the rest. No term of the result is divisible by
/// the leading monomial of a non-zero basis element.
pub fn normal_form<'a, O, I>(f: &Polynomial, basis: I, order: &O) -> Polynomial
where
    O: MonomialOrdering + ?Sized,
    I: IntoIterator<Item = &'a Polynomial> + Clone,
{
    let mut remainder = f.clone();
    let mut irreducible = Vec::new();

    loop {
        remainder = reduce(&remainder, basis.clone(), order);
        let Some(lt) = remainder.leading(order).cloned() else {
            break;
        };
        remainder = remainder.sub(&Polynomial::from(lt.clone()));
        irreducible.push(lt);
    }

    Polynomial::from_terms(irreducible)
}

/// Drops the term of `p` at monomial `m`.
///
/// The eliminated leading term cancels exactly in exact arithmetic; in `f64`
/// the difference may leave a rounding residue above the zero threshold.
fn without_monomial(p: &Polynomial, m: &Monomial) -> Polynomial {
    p.terms()
        .iter()
        .filter(|t| t.monomial() != m)
        .cloned()
        .collect()
}

/// Scales `p` so that its leading coefficient under `order` is 1.
///
/// The zero polynomial maps to itself, and a numerically zero leading
/// coefficient yields the zero polynomial.
pub fn make_monic<O>(p: &Polynomial, order: &O) -> Polynomial
where
    O: MonomialOrdering + ?Sized,
{
    let lc = p.leading_coefficient(order);

    if is_near_zero(lc) {
        return Polynomial::zero();
    }
    if is_near_zero(lc - 1.0) {
        return p.clone();
    }

    p.scale(1.0 / lc)
}
