//! End-to-end governance runs over on-disk documentation trees.

use docgov_checks::{run_checks, FindingKind};
use docgov_test_utils::{sample_changelog, sample_registry, DocsTree};
use pretty_assertions::assert_eq;

#[test]
fn valid_tree_passes_every_check() {
    let tree = DocsTree::valid();
    let report = run_checks(&tree.config());
    assert!(
        report.passed(),
        "unexpected findings:\n{}",
        report.generate_text()
    );
}

#[test]
fn phase_drift_between_roadmap_and_changelog_is_flagged() {
    let tree = DocsTree::valid();
    tree.write("CHANGELOG.md", &sample_changelog("M2", "2024-05-01"));
    let report = run_checks(&tree.config());
    let mismatches: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::AlignmentMismatch)
        .collect();
    assert_eq!(mismatches.len(), 1);
    assert!(mismatches[0].message.contains("roadmap='M3'"));
    assert!(mismatches[0].message.contains("changelog='M2'"));
}

#[test]
fn drift_in_both_fields_yields_two_mismatches() {
    let tree = DocsTree::valid();
    tree.write("CHANGELOG.md", &sample_changelog("M2", "2024-04-01"));
    let report = run_checks(&tree.config());
    let mismatches = report
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::AlignmentMismatch)
        .count();
    assert_eq!(mismatches, 2);
}

#[test]
fn deleted_plan_file_is_a_missing_file_finding() {
    let tree = DocsTree::valid();
    tree.remove("docs/plans/plan-002-storage.md");
    let report = run_checks(&tree.config());
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::MissingFile
            && f.message.contains("plan-002-storage.md")));
    // The roadmap link to the same file also stops resolving.
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::DanglingReference));
}

#[test]
fn broken_roadmap_link_is_a_dangling_reference() {
    let tree = DocsTree::valid();
    tree.write(
        "docs/project/roadmap.md",
        "# Project Roadmap\n\n\
         **Current Phase:** M3\n\
         **Last Updated:** 2024-05-01\n\n\
         ## Plans\n\n\
         - [Ghost plan](../plans/plan-099-ghost.md)\n",
    );
    let report = run_checks(&tree.config());
    let dangling: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::DanglingReference)
        .collect();
    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].message.contains("plan-099-ghost.md"));
}

#[test]
fn template_missing_headings_are_each_reported() {
    let tree = DocsTree::valid();
    tree.write(
        "docs/project/RELEASE_NOTES_TEMPLATE.md",
        "# Release Notes Template\n\n## Milestone\n\n## Release Summary\n",
    );
    let report = run_checks(&tree.config());
    let missing = report
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::MissingTemplateHeading)
        .count();
    assert_eq!(missing, 6);
}

#[test]
fn plan_without_lifecycle_marker_is_flagged() {
    let tree = DocsTree::valid();
    tree.write(
        "docs/plans/plan-002-storage.md",
        "# Storage Plan\n\nNo marker here.\n",
    );
    let report = run_checks(&tree.config());
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::MissingLifecycleMarker
            && f.message.contains("plan-002-storage.md")));
}

#[test]
fn superseded_plan_without_citation_is_flagged() {
    let tree = DocsTree::valid();
    tree.write(
        "docs/plans/plan-001-initial.md",
        "# Initial Plan\n\n**Lifecycle:** Superseded\n\nNo mention of the successor.\n",
    );
    let report = run_checks(&tree.config());
    let unreferenced = report
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::UnreferencedSupersession)
        .count();
    assert_eq!(unreferenced, 1);
}

#[test]
fn registry_without_superseded_rows_is_empty_history() {
    let tree = DocsTree::valid();
    tree.write(
        "docs/plans/PLAN_LIFECYCLE.md",
        "| Plan | Status | Superseded By | Notes |\n\
         | --- | --- | --- | --- |\n\
         | `plan-002-storage.md` | Active | - | current direction |\n",
    );
    let report = run_checks(&tree.config());
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::EmptyHistory));
}

#[test]
fn json_report_round_trips_finding_kinds() {
    let tree = DocsTree::valid();
    tree.remove("CHANGELOG.md");
    let report = run_checks(&tree.config());
    let json: serde_json::Value = serde_json::from_str(&report.generate_json()).unwrap();
    assert_eq!(json["passed"], false);
    assert!(json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["kind"] == "missing_file"));
}

#[test]
fn canned_registry_parses_to_two_rows() {
    let rows = docgov_markdown::parse_table_rows(
        &sample_registry(),
        docgov_checks::REGISTRY_HEADER_LABEL,
    );
    assert_eq!(rows.len(), 2);
}
