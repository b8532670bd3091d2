//! Errors raised when a configured limit stops a Gröbner basis computation.

use buchberger_poly::Variable;
use thiserror::Error;

/// Errors from [`groebner_basis_with_config`](crate::engine::groebner_basis_with_config).
///
/// The algorithm itself is total; these only arise from caps and checks
/// requested through [`BuchbergerConfig`](crate::config::BuchbergerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroebnerError {
    /// More critical pairs were dequeued than the configured limit allows.
    #[error("critical pair limit of {limit} exceeded after {processed} pairs")]
    PairLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// Pairs processed before aborting.
        processed: usize,
    },

    /// Inter-reduction did not reach a fixed point within the configured rounds.
    #[error("basis reduction did not stabilize within {limit} rounds")]
    ReductionRoundLimitExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// An input polynomial uses a variable the ordering does not rank.
    #[error("variable `{variable}` is not covered by the monomial ordering")]
    VariableNotOrdered {
        /// The offending variable.
        variable: Variable,
    },
}

/// Result type for Gröbner basis computations.
pub type Result<T> = std::result::Result<T, GroebnerError>;
