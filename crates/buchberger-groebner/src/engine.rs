//! Buchberger's algorithm for reduced Gröbner bases.
//!
//! The computation runs in three phases:
//! 1. Drop zero generators and enqueue every pair of the rest.
//! 2. Saturate: reduce the S-polynomial of each pair against the growing
//!    basis, appending every non-zero remainder together with its new pairs.
//! 3. Inter-reduce the saturated basis to a fixed point, which removes
//!    redundant elements, tail-reduces the rest and makes them monic.

use std::cmp::Ordering;

use buchberger_poly::{MonomialOrdering, Polynomial};
use tracing::{debug, trace, warn};

use crate::config::BuchbergerConfig;
use crate::error::{GroebnerError, Result};
use crate::operations::{make_monic, normal_form, reduce, reduce_with_steps, s_polynomial};
use crate::pairs::{CriticalPair, PairQueue};

/// State of a single Buchberger run.
///
/// The working basis is owned exclusively by the run. It only grows during
/// saturation and is replaced by its inter-reduced form in
/// [`compute`](Self::compute).
pub struct Buchberger<'o, O: MonomialOrdering + ?Sized> {
    /// Monomial ordering used for every leading term.
    order: &'o O,
    /// Caps and optional checks.
    config: BuchbergerConfig,
    /// Current basis (never contains the zero polynomial).
    basis: Vec<Polynomial>,
    /// Pending critical pairs.
    pairs: PairQueue,
}

impl<'o, O: MonomialOrdering + ?Sized> Buchberger<'o, O> {
    /// Creates a run from generators, dropping zero polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`GroebnerError::VariableNotOrdered`] if the coverage check is
    /// enabled and a generator uses a variable the ordering does not rank.
    pub fn new<I>(generators: I, order: &'o O, config: BuchbergerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Polynomial>,
    {
        let basis: Vec<Polynomial> = generators.into_iter().filter(|p| !p.is_zero()).collect();

        if config.check_variable_coverage {
            check_coverage(&basis, order)?;
        }

        let pairs = PairQueue::all_pairs(basis.len());
        debug!(
            ordering = order.name(),
            generators = basis.len(),
            pairs = pairs.len(),
            "starting Buchberger run"
        );

        Ok(Self {
            order,
            config,
            basis,
            pairs,
        })
    }

    /// Returns the current working basis.
    #[must_use]
    pub fn basis(&self) -> &[Polynomial] {
        &self.basis
    }

    /// Returns the number of polynomials in the working basis.
    #[must_use]
    pub fn basis_size(&self) -> usize {
        self.basis.len()
    }

    /// Returns the number of critical pairs still pending.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.pairs.len()
    }

    /// Processes critical pairs until the queue is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GroebnerError::PairLimitExceeded`] if the configured pair
    /// cap is reached while pairs are still pending.
    pub fn saturate(&mut self) -> Result<()> {
        while let Some(pair) = self.next_pair()? {
            self.process_pair(pair);
        }

        debug!(
            basis = self.basis.len(),
            processed = self.pairs.processed(),
            "saturation finished"
        );
        Ok(())
    }

    /// Runs saturation and inter-reduction, returning the reduced basis.
    ///
    /// # Errors
    ///
    /// Propagates any cap configured in [`BuchbergerConfig`].
    pub fn compute(mut self) -> Result<Vec<Polynomial>> {
        self.saturate()?;
        reduce_basis(self.basis, self.order, &self.config)
    }

    fn next_pair(&mut self) -> Result<Option<CriticalPair>> {
        if let Some(limit) = self.config.max_pairs {
            let processed = self.pairs.processed();
            if processed >= limit && !self.pairs.is_empty() {
                warn!(
                    limit,
                    pending = self.pairs.len(),
                    "critical pair limit reached"
                );
                return Err(GroebnerError::PairLimitExceeded { limit, processed });
            }
        }
        Ok(self.pairs.pop())
    }

    /// Reduces the S-polynomial of `pair`, appending a non-zero remainder.
    fn process_pair(&mut self, pair: CriticalPair) {
        let s = s_polynomial(&self.basis[pair.i], &self.basis[pair.j], self.order);
        let (h, steps) = reduce_with_steps(&s, &self.basis, self.order);

        if h.is_zero() {
            trace!(i = pair.i, j = pair.j, steps, "pair reduced to zero");
            return;
        }

        let index = self.basis.len();
        trace!(
            i = pair.i,
            j = pair.j,
            steps,
            terms = h.len(),
            index,
            "new basis element"
        );
        self.basis.push(h);
        self.pairs.extend_with(index);
    }
}

/// Inter-reduces a basis to a fixed point.
///
/// Every element is made monic and zeros are dropped. Then, each round,
/// elements are visited in sorted order and reduced against the results
/// already kept this round together with the elements still to be visited,
/// using [`normal_form`] or, with `full_reduction` off, leading-term
/// [`reduce`]. Non-zero results are made monic and kept unless already
/// present. The loop stops when a round leaves the sorted basis unchanged.
///
/// Reducing against kept results rather than the previous round's basis
/// means two mutually redundant elements never eliminate each other.
///
/// # Errors
///
/// Returns [`GroebnerError::ReductionRoundLimitExceeded`] if the configured
/// round cap is reached before the fixed point.
pub fn reduce_basis<O>(
    basis: Vec<Polynomial>,
    order: &O,
    config: &BuchbergerConfig,
) -> Result<Vec<Polynomial>>
where
    O: MonomialOrdering + ?Sized,
{
    let mut current: Vec<Polynomial> = basis
        .iter()
        .map(|p| make_monic(p, order))
        .filter(|p| !p.is_zero())
        .collect();
    sort_basis(&mut current, order);

    let mut round = 0;
    loop {
        round += 1;

        let mut next: Vec<Polynomial> = Vec::with_capacity(current.len());
        for (k, p) in current.iter().enumerate() {
            let others = next.iter().chain(&current[k + 1..]);
            let reduced = if config.full_reduction {
                normal_form(p, others, order)
            } else {
                reduce(p, others, order)
            };

            let reduced = make_monic(&reduced, order);
            if !reduced.is_zero() && !next.contains(&reduced) {
                next.push(reduced);
            }
        }
        sort_basis(&mut next, order);
        trace!(round, size = next.len(), "inter-reduction round");

        if next == current {
            debug!(rounds = round, size = next.len(), "basis reduced");
            return Ok(next);
        }

        if let Some(limit) = config.max_reduction_rounds {
            if round >= limit {
                warn!(limit, size = next.len(), "inter-reduction round limit reached");
                return Err(GroebnerError::ReductionRoundLimitExceeded { limit });
            }
        }
        current = next;
    }
}

/// Computes the reduced Gröbner basis of `input` under `order`.
///
/// Zero polynomials in the input are ignored; an input with no non-zero
/// polynomial yields the empty basis.
pub fn groebner_basis<I, O>(input: I, order: &O) -> Vec<Polynomial>
where
    I: IntoIterator<Item = Polynomial>,
    O: MonomialOrdering + ?Sized,
{
    groebner_basis_with_config(input, order, &BuchbergerConfig::default())
        .unwrap_or_else(|err| unreachable!("default configuration cannot fail: {err}"))
}

/// Computes the reduced Gröbner basis with explicit caps and checks.
///
/// # Errors
///
/// Returns an error only for limits and checks enabled in `config`.
pub fn groebner_basis_with_config<I, O>(
    input: I,
    order: &O,
    config: &BuchbergerConfig,
) -> Result<Vec<Polynomial>>
where
    I: IntoIterator<Item = Polynomial>,
    O: MonomialOrdering + ?Sized,
{
    Buchberger::new(input, order, config.clone())?.compute()
}

fn check_coverage<O>(polys: &[Polynomial], order: &O) -> Result<()>
where
    O: MonomialOrdering + ?Sized,
{
    let ranked = order.variables();
    for p in polys {
        if let Some(variable) = p.variables().into_iter().find(|v| !ranked.contains(v)) {
            warn!(%variable, "variable missing from monomial ordering");
            return Err(GroebnerError::VariableNotOrdered { variable });
        }
    }
    Ok(())
}

/// Sorts by leading monomial under `order`, breaking ties canonically.
fn sort_basis<O>(basis: &mut [Polynomial], order: &O)
where
    O: MonomialOrdering + ?Sized,
{
    basis.sort_by(|a, b| {
        order
            .compare(&a.leading_monomial(order), &b.leading_monomial(order))
            .then_with(|| canonical_cmp(a, b))
    });
}

/// Total order on polynomials by their stored terms.
fn canonical_cmp(a: &Polynomial, b: &Polynomial) -> Ordering {
    for (s, t) in a.terms().iter().zip(b.terms()) {
        let ord = s
            .monomial()
            .cmp(t.monomial())
            .then_with(|| s.coefficient().total_cmp(&t.coefficient()));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}
