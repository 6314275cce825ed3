use super::QueryDescriptor;
use crate::Listing;

/// Passes when no level is selected or the listing's level is selected.
pub fn level_matches(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    descriptor.levels.is_empty() || descriptor.levels.contains(&listing.experience_level)
}

/// Passes when no payment kind is selected or the listing's kind is selected.
pub fn payment_matches(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    descriptor.payment_kinds.is_empty()
        || descriptor.payment_kinds.contains(&listing.compensation_kind)
}

/// Passes when no category is selected or the listing's category is selected.
pub fn category_matches(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    descriptor.categories.is_empty() || descriptor.categories.contains(&listing.category)
}

/// Case-insensitive substring containment over title, company, description,
/// and each tag. No tokenization or ranking.
pub fn text_matches(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    if descriptor.search_text.is_empty() {
        return true;
    }

    let needle = descriptor.search_text.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.company.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Case-insensitive substring containment over the location field only.
pub fn location_matches(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    if descriptor.search_location.is_empty() {
        return true;
    }

    listing
        .location
        .to_lowercase()
        .contains(&descriptor.search_location.to_lowercase())
}

/// Logical AND of all five predicates. Set-membership facets run before the
/// substring scans since they are cheaper to reject on.
pub fn matches_descriptor(listing: &Listing, descriptor: &QueryDescriptor) -> bool {
    level_matches(listing, descriptor)
        && payment_matches(listing, descriptor)
        && category_matches(listing, descriptor)
        && text_matches(listing, descriptor)
        && location_matches(listing, descriptor)
}
