use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::Listing;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The document is missing, not a JSON array, or a record does not fit
    /// the listing shape. Fatal to the call; no partial collection is
    /// returned.
    #[error("invalid listings document: {0}")]
    InvalidInput(String),
    #[error("failed to read listings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a catalog from a JSON document. The document must be an array of
/// listing records; anything else is [`SourceError::InvalidInput`].
pub fn load_listings_from_str(text: &str) -> Result<Vec<Listing>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| SourceError::InvalidInput(err.to_string()))?;

    if !value.is_array() {
        return Err(SourceError::InvalidInput(
            "expected a JSON array of listings".into(),
        ));
    }

    serde_json::from_value(value).map_err(|err| SourceError::InvalidInput(err.to_string()))
}

pub fn load_listings_from_path(path: &Path) -> Result<Vec<Listing>, SourceError> {
    let text = std::fs::read_to_string(path)?;
    load_listings_from_str(&text)
}

/// Flip the saved flag on the listing with the given id, between engine
/// invocations. Returns whether the id was found.
pub fn toggle_saved(listings: &mut [Listing], id: &str) -> bool {
    match listings.iter_mut().find(|listing| listing.id == id) {
        Some(listing) => {
            listing.saved = !listing.saved;
            true
        }
        None => {
            warn!(%id, "toggle_saved: no listing with this id");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, CompensationKind, ExperienceLevel};
    use std::io::Write;

    const ONE_LISTING: &str = r#"[
        {
            "id": "gf-7",
            "title": "Landing page copy",
            "company": "Brightside",
            "location": "Austin, TX",
            "description": "Write punchy landing page copy",
            "compensation_text": "$350",
            "compensation_kind": "fixed",
            "experience_level": "entry",
            "posted_text": "1 day ago",
            "proposal_count": 4,
            "tags": ["copywriting"],
            "category": "writing"
        }
    ]"#;

    #[test]
    fn parses_a_listing_array() {
        let listings = load_listings_from_str(ONE_LISTING).unwrap();
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.id, "gf-7");
        assert_eq!(listing.compensation_kind, CompensationKind::Fixed);
        assert_eq!(listing.experience_level, ExperienceLevel::Entry);
        assert_eq!(listing.category, Category::Writing);
        // `saved` defaults to false when the source omits it.
        assert!(!listing.saved);
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = load_listings_from_str(r#"{"id": "gf-7"}"#).unwrap_err();
        assert!(matches!(err, SourceError::InvalidInput(_)));

        let err = load_listings_from_str("not json at all").unwrap_err();
        assert!(matches!(err, SourceError::InvalidInput(_)));
    }

    #[test]
    fn rejects_malformed_records() {
        let err = load_listings_from_str(r#"[{"id": "gf-7"}]"#).unwrap_err();
        assert!(matches!(err, SourceError::InvalidInput(_)));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_LISTING.as_bytes()).unwrap();

        let listings = load_listings_from_path(file.path()).unwrap();
        assert_eq!(listings.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_listings_from_path(Path::new("/nonexistent/listings.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn toggles_saved_by_id() {
        let mut listings = load_listings_from_str(ONE_LISTING).unwrap();

        assert!(toggle_saved(&mut listings, "gf-7"));
        assert!(listings[0].saved);
        assert!(toggle_saved(&mut listings, "gf-7"));
        assert!(!listings[0].saved);

        assert!(!toggle_saved(&mut listings, "gf-404"));
    }
}
