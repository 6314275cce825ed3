use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel age for listings whose `posted_text` does not match the
/// `<integer> day(s) ago` pattern. Sorts after every parseable age under
/// recency ordering, so a malformed field never aborts a query.
pub const UNKNOWN_AGE_DAYS: u32 = 999;

/// Inclusive window (in days) for the "new listing" flag.
pub const RECENT_WINDOW_DAYS: u32 = 3;

// Only "<n> day(s)" is recognized; "2 weeks ago" or "1 hour ago" fall into
// the unknown bucket. Kept narrow to match the upstream feed format.
static AGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s+days?").unwrap());

/// Extract a numeric magnitude from a free-form compensation string.
///
/// Strips every character that is not an ASCII digit or decimal point across
/// the whole string, then parses the remainder as a float. Unparseable or
/// empty remainders yield 0.0 rather than an error.
///
/// "$1,200.50" -> 1200.50, " $24/hr " -> 24.0, "no numbers here" -> 0.0
pub fn parse_magnitude(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse().unwrap_or(0.0)
}

/// Extract a day count from a free-form "posted X days ago" string.
///
/// Matches `(\d+)\s+days?` case-insensitively anywhere in the string; no
/// match (or an out-of-range capture) yields [`UNKNOWN_AGE_DAYS`].
pub fn parse_age_in_days(text: &str) -> u32 {
    AGE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(UNKNOWN_AGE_DAYS)
}

/// True iff the posted age parses to [`RECENT_WINDOW_DAYS`] or less.
pub fn is_recent(posted_text: &str) -> bool {
    parse_age_in_days(posted_text) <= RECENT_WINDOW_DAYS
}
