use tracing::debug;

use super::comparators::compare;
use super::predicates::matches_descriptor;
use super::weights::RelevanceWeights;
use super::QueryDescriptor;
use crate::Listing;

#[derive(Debug, Clone, Default)]
pub struct QueryEngineConfig {
    pub relevance: RelevanceWeights,
}

/// Filter-then-sort orchestrator. Pure and synchronous: given the same
/// listings and descriptor it always returns the same ordering, never
/// mutates its input, and never fails. The caller re-invokes it on every
/// descriptor change.
pub struct QueryEngine {
    config: QueryEngineConfig,
}

impl QueryEngine {
    pub fn new(config: QueryEngineConfig) -> Self {
        Self { config }
    }

    /// Apply the AND of all facet/search predicates, then stable-sort the
    /// survivors by the descriptor's sort mode. Ties keep input order.
    pub fn execute(&self, listings: &[Listing], descriptor: &QueryDescriptor) -> Vec<Listing> {
        let mut results: Vec<Listing> = listings
            .iter()
            .filter(|listing| matches_descriptor(listing, descriptor))
            .cloned()
            .collect();

        results.sort_by(|a, b| compare(descriptor.sort_mode, &self.config.relevance, a, b));

        debug!(
            total = listings.len(),
            matched = results.len(),
            sort_mode = %descriptor.sort_mode,
            "query executed"
        );

        results
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(QueryEngineConfig::default())
    }
}

/// Run one query with the default engine configuration.
pub fn execute(listings: &[Listing], descriptor: &QueryDescriptor) -> Vec<Listing> {
    QueryEngine::default().execute(listings, descriptor)
}
