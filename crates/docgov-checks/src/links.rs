//! Roadmap link reference validation
//!
//! The roadmap cites plan documents with parenthesized relative links of the
//! form `(../plans/<name>.md)`. Each distinct reference must resolve to an
//! existing file.

use crate::findings::{Finding, FindingKind};
use std::collections::BTreeSet;
use std::path::Path;

const PLANS_LINK_PREFIX: &str = "(../plans/";

/// Collect the distinct `../plans/*.md` references in `text`, sorted.
///
/// Sorting (not scan order) fixes the error ordering for determinism.
fn plan_references(text: &str) -> BTreeSet<String> {
    let mut refs = BTreeSet::new();
    for (idx, _) in text.match_indices(PLANS_LINK_PREFIX) {
        let rest = &text[idx + 1..];
        if let Some(close) = rest.find(')') {
            let target = &rest[..close];
            if target.ends_with(".md") {
                refs.insert(target.to_string());
            }
        }
    }
    refs
}

/// Check every plan reference in the roadmap against the filesystem.
///
/// `base_dir` is the roadmap's own directory; references are relative to it.
/// One `DanglingReference` finding per missing target, in sorted-path order.
pub fn validate_roadmap_links(roadmap: &str, base_dir: &Path, findings: &mut Vec<Finding>) {
    for rel in plan_references(roadmap) {
        if !base_dir.join(&rel).exists() {
            findings.push(Finding::new(
                FindingKind::DanglingReference,
                format!("Roadmap link target does not exist: {rel}"),
            ));
        }
    }
}
