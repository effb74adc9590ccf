//! Suggested category labels.
//!
//! Categories are free text. The list below feeds form pickers and lets the
//! services flag likely typos, but membership is never enforced: historical
//! entries may carry labels that are no longer suggested.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub const SUGGESTED_CATEGORIES: [&str; 9] = [
    "Food",
    "Housing",
    "Transport",
    "Leisure",
    "Health",
    "Education",
    "Salary",
    "Investments",
    "Other",
];

const SIMILARITY_THRESHOLD: f64 = 0.85;

static SUGGESTED_LOOKUP: Lazy<HashSet<String>> = Lazy::new(|| {
    SUGGESTED_CATEGORIES
        .iter()
        .map(|name| name.to_lowercase())
        .collect()
});

/// Returns true when `name` matches a suggested category, ignoring case and
/// surrounding whitespace.
pub fn is_suggested(name: &str) -> bool {
    SUGGESTED_LOOKUP.contains(&name.trim().to_lowercase())
}

/// Finds the suggested category that `name` most plausibly meant.
///
/// Returns `None` for exact suggestions and for labels that are not close to
/// any suggestion.
pub fn closest_suggestion(name: &str) -> Option<&'static str> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() || SUGGESTED_LOOKUP.contains(&needle) {
        return None;
    }
    SUGGESTED_CATEGORIES
        .iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (*candidate, score)
        })
        .filter(|(_, score)| *score >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}
