use std::cmp::Ordering;

use super::weights::{RelevanceWeights, WEEKLY_HOURS};
use super::SortMode;
use crate::parse::{parse_age_in_days, parse_magnitude};
use crate::{CompensationKind, Listing};

/// Relative order of two listings under a sort mode. Every mode defines a
/// total preorder; callers must use a stable sort so that ties keep the
/// input order.
pub fn compare(
    mode: SortMode,
    weights: &RelevanceWeights,
    a: &Listing,
    b: &Listing,
) -> Ordering {
    match mode {
        // Smaller age first; the unknown-age sentinel (999) lands last.
        SortMode::RecentlyListed => age_rank(a).cmp(&age_rank(b)),
        SortMode::MostProposals => b.proposal_count.cmp(&a.proposal_count),
        SortMode::HighestBudget => comparable_budget(b)
            .partial_cmp(&comparable_budget(a))
            .unwrap_or(Ordering::Equal),
        SortMode::MostRelevant => relevance_score(b, weights).cmp(&relevance_score(a, weights)),
    }
}

/// Parsed posted-age of a listing, sentinel included.
pub fn age_rank(listing: &Listing) -> u32 {
    parse_age_in_days(&listing.posted_text)
}

/// Budget magnitude normalized for cross-unit comparison: hourly rates are
/// scaled by [`WEEKLY_HOURS`] to a weekly-equivalent figure, fixed prices
/// compare raw. An approximation, not a currency conversion.
pub fn comparable_budget(listing: &Listing) -> f64 {
    let magnitude = parse_magnitude(&listing.compensation_text);
    match listing.compensation_kind {
        CompensationKind::Hourly => magnitude * WEEKLY_HOURS,
        CompensationKind::Fixed => magnitude,
    }
}

/// Composite relevance score:
/// recency decays linearly from the cap to zero (clamped, never negative),
/// proposals add linear weight, saved listings get a flat bonus.
pub fn relevance_score(listing: &Listing, weights: &RelevanceWeights) -> u64 {
    let age = parse_age_in_days(&listing.posted_text).min(weights.recency_cap_days);
    let recency = u64::from(weights.recency_cap_days - age) * u64::from(weights.recency_points_per_day);
    let proposals = u64::from(listing.proposal_count) * u64::from(weights.proposal_points);
    let saved = if listing.saved {
        u64::from(weights.saved_bonus)
    } else {
        0
    };

    recency + proposals + saved
}
