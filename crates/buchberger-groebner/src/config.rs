//! Configuration for the Buchberger engine.

/// Configuration for [`Buchberger`](crate::engine::Buchberger).
///
/// The default configuration imposes no limits, performs no extra checks
/// and tail-reduces the final basis, so the computation runs to its natural
/// fixed point and returns the reduced Gröbner basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuchbergerConfig {
    /// Maximum number of critical pairs to process (`None` = no limit).
    pub max_pairs: Option<usize>,
    /// Maximum number of inter-reduction rounds (`None` = no limit).
    pub max_reduction_rounds: Option<usize>,
    /// Reject input with variables missing from the ordering.
    pub check_variable_coverage: bool,
    /// Inter-reduce with full normal forms instead of leading-term division.
    pub full_reduction: bool,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            max_pairs: None,
            max_reduction_rounds: None,
            check_variable_coverage: false,
            full_reduction: true,
        }
    }
}

impl BuchbergerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts when `limit` critical pairs have been processed and more are
    /// still pending. A run that needs exactly `limit` pairs succeeds.
    #[must_use]
    pub fn with_max_pairs(mut self, limit: usize) -> Self {
        self.max_pairs = Some(limit);
        self
    }

    /// Aborts if `limit` inter-reduction rounds pass without a fixed point.
    #[must_use]
    pub fn with_max_reduction_rounds(mut self, limit: usize) -> Self {
        self.max_reduction_rounds = Some(limit);
        self
    }

    /// Enables or disables the variable coverage check.
    #[must_use]
    pub fn with_variable_coverage_check(mut self, enabled: bool) -> Self {
        self.check_variable_coverage = enabled;
        self
    }

    /// Enables or disables tail reduction during inter-reduction.
    #[must_use]
    pub fn with_full_reduction(mut self, enabled: bool) -> Self {
        self.full_reduction = enabled;
        self
    }
}
