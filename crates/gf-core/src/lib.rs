pub mod logging;
pub mod parse;
pub mod query;
pub mod source;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

// Commonly used data models for the query engine.

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Advanced,
}

/// Unit semantics for `Listing::compensation_text`. `Hourly` magnitudes are a
/// per-hour rate; `Fixed` magnitudes are a whole-project price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CompensationKind {
    Hourly,
    Fixed,
}

/// Closed set of catalog categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    WebDevelopment,
    MobileDevelopment,
    Design,
    Writing,
    Marketing,
    DataScience,
}

/// One job/project record in the catalog.
///
/// `compensation_text` and `posted_text` stay free-form on purpose: the source
/// feeds display strings and the parsers in [`parse`] degrade gracefully when
/// a field does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique id; equality only, carries no ordering meaning.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Free-form, e.g. "$24/hr" or " $1,200 ".
    pub compensation_text: String,
    pub compensation_kind: CompensationKind,
    pub experience_level: ExperienceLevel,
    /// Relative age, e.g. "3 days ago". Anything else means "age unknown".
    pub posted_text: String,
    pub proposal_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owned by the surrounding application; the engine only reads it.
    #[serde(default)]
    pub saved: bool,
    pub category: Category,
}

impl Listing {
    /// True iff the listing's posted age parses to 3 days or less.
    pub fn is_recent(&self) -> bool {
        parse::is_recent(&self.posted_text)
    }
}
