/// Hour count used to lift an hourly rate to a weekly-equivalent figure when
/// comparing against fixed-price budgets. A heuristic (standard work week),
/// not an economic conversion; tunable policy, kept at 40 for compatibility
/// with the original catalog behavior.
pub const WEEKLY_HOURS: f64 = 40.0;

/// Default relevance weights.
/// Recency contributes up to `recency_cap_days * recency_points_per_day`
/// points (linear decay, clamped at the cap), proposals add unbounded linear
/// weight, and saved listings get a flat bonus. The numbers are tunable
/// policy with no physical meaning; they are preserved exactly from the
/// original catalog.
pub const RELEVANCE_WEIGHTS: RelevanceWeights = RelevanceWeights {
    recency_cap_days: 30,
    recency_points_per_day: 10,
    proposal_points: 2,
    saved_bonus: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceWeights {
    pub recency_cap_days: u32,
    pub recency_points_per_day: u32,
    pub proposal_points: u32,
    pub saved_bonus: u32,
}

impl RelevanceWeights {
    /// Largest score the recency term alone can contribute.
    pub fn max_recency_points(&self) -> u32 {
        self.recency_cap_days * self.recency_points_per_day
    }
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        RELEVANCE_WEIGHTS
    }
}
