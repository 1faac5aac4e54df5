//! Category bucket collection
//!
//! Walks the changelog's `[Unreleased]` body line by line, switching buckets
//! on `###` headings and collecting bullet entries verbatim.

use docgov_markdown::heading_rank;
use indexmap::IndexMap;

/// Keep a Changelog categories, in canonical render order
pub const CATEGORIES: [&str; 6] = [
    "Added",
    "Changed",
    "Deprecated",
    "Removed",
    "Fixed",
    "Security",
];

/// Whether a line is a bullet entry (`- ` after optional indentation).
fn is_bullet(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Bucket the bullet entries of an `[Unreleased]` body by category heading.
///
/// Every category gets a bucket, empty or not, in canonical order. A `###`
/// heading outside the known categories turns collection off until the next
/// recognized heading; bullets are kept verbatim, right-trimmed.
#[must_use]
pub fn collect_category_items(unreleased: &str) -> IndexMap<&'static str, Vec<String>> {
    let mut items: IndexMap<&'static str, Vec<String>> =
        CATEGORIES.iter().map(|name| (*name, Vec::new())).collect();
    let mut current: Option<&'static str> = None;

    for raw_line in unreleased.lines() {
        let line = raw_line.trim_end();
        if heading_rank(line) == Some(3) {
            let title = line[3..].trim();
            current = CATEGORIES.iter().copied().find(|name| *name == title);
            continue;
        }
        if let Some(category) = current {
            if is_bullet(line) {
                items[category].push(line.to_string());
            }
        }
    }

    items
}
