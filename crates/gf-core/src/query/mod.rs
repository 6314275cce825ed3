pub mod comparators;
pub mod engine;
pub mod predicates;
pub mod weights;

pub use engine::{execute, QueryEngine, QueryEngineConfig};
pub use predicates::matches_descriptor;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Category, CompensationKind, ExperienceLevel};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortMode {
    #[default]
    RecentlyListed,
    MostProposals,
    HighestBudget,
    MostRelevant,
}

/// The immutable bundle of active facets, search terms, and sort mode for
/// one evaluation. An empty facet set or empty search string means "no
/// restriction on this dimension", never "match nothing".
///
/// Built fresh per query cycle by the surrounding application; the engine
/// only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDescriptor {
    pub levels: HashSet<ExperienceLevel>,
    pub payment_kinds: HashSet<CompensationKind>,
    pub categories: HashSet<Category>,
    pub search_text: String,
    pub search_location: String,
    pub sort_mode: SortMode,
}

impl QueryDescriptor {
    pub fn new(sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..Self::default()
        }
    }
}
