//! Roadmap/changelog alignment validation
//!
//! The roadmap declares a current phase and a last-updated date once; the
//! changelog's unreleased section mirrors both inside a dedicated
//! `### Roadmap Alignment` block. The two documents are independently edited,
//! so this check is the only guard against silent drift between them.

use crate::findings::{Finding, FindingKind};
use docgov_markdown::{
    bold_date_field, bold_field, bold_field_present, bullet_date_field, bullet_field,
    bullet_field_present, extract_section,
};

/// Heading of the changelog section accumulating unshipped entries
pub const UNRELEASED_HEADING: &str = "## [Unreleased]";
/// Heading of the alignment sub-block inside the unreleased section
pub const ALIGNMENT_HEADING: &str = "### Roadmap Alignment";

/// Roadmap bold-label carrying the phase
pub const PHASE_LABEL: &str = "Current Phase";
/// Roadmap bold-label carrying the last-updated date
pub const UPDATED_LABEL: &str = "Last Updated";

const CHANGELOG_PHASE_LABEL: &str = "Current roadmap phase";
const CHANGELOG_UPDATED_LABEL: &str = "Roadmap last updated";

/// Extract the roadmap's `(phase, last_updated)` pair, reporting absences.
///
/// A `Last Updated` line whose value fails the date shape is reported as
/// `MalformedDate`; a roadmap with no such line at all as
/// `MissingMetadataField`.
pub fn roadmap_metadata<'a>(
    roadmap: &'a str,
    findings: &mut Vec<Finding>,
) -> (Option<&'a str>, Option<&'a str>) {
    let phase = bold_field(roadmap, PHASE_LABEL);
    if phase.is_none() {
        findings.push(Finding::new(
            FindingKind::MissingMetadataField,
            format!("Roadmap is missing '**{PHASE_LABEL}:**' metadata"),
        ));
    }

    let updated = bold_date_field(roadmap, UPDATED_LABEL);
    if updated.is_none() {
        if bold_field_present(roadmap, UPDATED_LABEL) {
            findings.push(Finding::new(
                FindingKind::MalformedDate,
                format!("Roadmap '**{UPDATED_LABEL}:**' value is not a YYYY-MM-DD date"),
            ));
        } else {
            findings.push(Finding::new(
                FindingKind::MissingMetadataField,
                format!("Roadmap is missing '**{UPDATED_LABEL}:**' metadata"),
            ));
        }
    }

    (phase, updated)
}

/// Cross-check the roadmap's phase/date pair against the changelog.
///
/// Every defect is its own finding: missing unreleased section, missing
/// alignment block, missing phase or date line, and one `AlignmentMismatch`
/// per differing field. Equality is exact; nothing is normalized.
pub fn validate_alignment(roadmap: &str, changelog: &str, findings: &mut Vec<Finding>) {
    let (phase, updated) = roadmap_metadata(roadmap, findings);

    let unreleased = extract_section(changelog, UNRELEASED_HEADING);
    if unreleased.is_none() {
        findings.push(Finding::new(
            FindingKind::MissingSection,
            format!("Changelog is missing a '{UNRELEASED_HEADING}' section"),
        ));
    }

    // Block comparison needs all three inputs; their absences were reported.
    let (Some(phase), Some(updated), Some(unreleased)) = (phase, updated, unreleased) else {
        return;
    };

    validate_alignment_block(phase, updated, unreleased, findings);
}

fn validate_alignment_block(
    roadmap_phase: &str,
    roadmap_updated: &str,
    unreleased: &str,
    findings: &mut Vec<Finding>,
) {
    let Some(block) = extract_section(unreleased, ALIGNMENT_HEADING) else {
        findings.push(Finding::new(
            FindingKind::MissingSection,
            format!("Changelog [Unreleased] is missing '{ALIGNMENT_HEADING}' block"),
        ));
        return;
    };

    let changelog_phase = bullet_field(block, CHANGELOG_PHASE_LABEL);
    if changelog_phase.is_none() {
        findings.push(Finding::new(
            FindingKind::MissingMetadataField,
            format!("Roadmap Alignment block missing '- {CHANGELOG_PHASE_LABEL}:'"),
        ));
    }

    let changelog_updated = bullet_date_field(block, CHANGELOG_UPDATED_LABEL);
    if changelog_updated.is_none() {
        if bullet_field_present(block, CHANGELOG_UPDATED_LABEL) {
            findings.push(Finding::new(
                FindingKind::MalformedDate,
                format!(
                    "Roadmap Alignment block '- {CHANGELOG_UPDATED_LABEL}:' value is not a YYYY-MM-DD date"
                ),
            ));
        } else {
            findings.push(Finding::new(
                FindingKind::MissingMetadataField,
                format!("Roadmap Alignment block missing '- {CHANGELOG_UPDATED_LABEL}:'"),
            ));
        }
    }

    if let Some(changelog_phase) = changelog_phase {
        if changelog_phase != roadmap_phase {
            findings.push(Finding::new(
                FindingKind::AlignmentMismatch,
                format!(
                    "Roadmap/Changelog phase mismatch: roadmap='{roadmap_phase}', changelog='{changelog_phase}'"
                ),
            ));
        }
    }
    if let Some(changelog_updated) = changelog_updated {
        if changelog_updated != roadmap_updated {
            findings.push(Finding::new(
                FindingKind::AlignmentMismatch,
                format!(
                    "Roadmap/Changelog last-updated mismatch: roadmap='{roadmap_updated}', changelog='{changelog_updated}'"
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap(phase: &str, updated: &str) -> String {
        format!("# Roadmap\n\n**Current Phase:** {phase}\n**Last Updated:** {updated}\n")
    }

    fn changelog(phase: &str, updated: &str) -> String {
        format!(
            "# Changelog\n\n## [Unreleased]\n\n### Roadmap Alignment\n\
             - Current roadmap phase: {phase}\n- Roadmap last updated: {updated}\n\n\
             ### Added\n- Something\n\n## [0.1.0] - 2024-01-01\n"
        )
    }

    fn run(roadmap: &str, changelog: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        validate_alignment(roadmap, changelog, &mut findings);
        findings
    }

    #[test]
    fn matching_pair_yields_no_findings() {
        let findings = run(
            &roadmap("M3", "2024-05-01"),
            &changelog("M3", "2024-05-01"),
        );
        assert!(findings.is_empty(), "unexpected: {findings:?}");
    }

    #[test]
    fn phase_mismatch_is_exactly_one_finding() {
        let findings = run(
            &roadmap("M3", "2024-05-01"),
            &changelog("M2", "2024-05-01"),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::AlignmentMismatch);
        assert!(findings[0].message.contains("roadmap='M3'"));
        assert!(findings[0].message.contains("changelog='M2'"));
    }

    #[test]
    fn phase_and_date_mismatches_are_separate_findings() {
        let findings = run(
            &roadmap("M3", "2024-05-01"),
            &changelog("M2", "2024-04-01"),
        );
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.kind == FindingKind::AlignmentMismatch));
        assert!(findings[0].message.contains("phase mismatch"));
        assert!(findings[1].message.contains("last-updated mismatch"));
    }

    #[test]
    fn missing_unreleased_section() {
        let findings = run(&roadmap("M3", "2024-05-01"), "# Changelog\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingSection);
    }

    #[test]
    fn missing_alignment_block() {
        let changelog = "# Changelog\n\n## [Unreleased]\n\n### Added\n- X\n";
        let findings = run(&roadmap("M3", "2024-05-01"), changelog);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingSection);
        assert!(findings[0].message.contains("Roadmap Alignment"));
    }

    #[test]
    fn missing_phase_line_in_block() {
        let changelog = "\
## [Unreleased]\n\n### Roadmap Alignment\n- Roadmap last updated: 2024-05-01\n";
        let findings = run(&roadmap("M3", "2024-05-01"), changelog);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingMetadataField);
        assert!(findings[0].message.contains("Current roadmap phase"));
    }

    #[test]
    fn malformed_changelog_date_is_distinct() {
        let changelog = "\
## [Unreleased]\n\n### Roadmap Alignment\n\
- Current roadmap phase: M3\n- Roadmap last updated: soon\n";
        let findings = run(&roadmap("M3", "2024-05-01"), changelog);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MalformedDate);
    }

    #[test]
    fn roadmap_missing_both_fields_skips_block_checks() {
        let findings = run("# Roadmap\n", &changelog("M3", "2024-05-01"));
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.kind == FindingKind::MissingMetadataField));
    }

    #[test]
    fn roadmap_malformed_date_reported_as_malformed() {
        let bad = "# Roadmap\n\n**Current Phase:** M3\n**Last Updated:** soonish\n";
        let findings = run(bad, &changelog("M3", "2024-05-01"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MalformedDate);
    }
}
