//! Plan lifecycle validation tests.
//!
//! These live as integration tests because `MemoryPlans` implements
//! `PlanSource` for the externally-compiled `docgov_checks`, which cannot
//! unify with the in-crate trait inside a `#[cfg(test)]` unit-test build.

use docgov_checks::lifecycle::{validate_lifecycle, LifecycleStatus, REGISTRY_HEADER_LABEL};
use docgov_checks::{Finding, FindingKind};
use docgov_markdown::{parse_table_rows, TableRow};
use docgov_test_utils::MemoryPlans;

fn rows(table: &str) -> Vec<TableRow> {
    parse_table_rows(table, REGISTRY_HEADER_LABEL)
}

fn run(table: &str, plans: &MemoryPlans) -> Vec<Finding> {
    let mut findings = Vec::new();
    validate_lifecycle(&rows(table), plans, &mut findings);
    findings
}

const VALID_TABLE: &str = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| `old.md` | Superseded | `new.md` | replaced |
| `new.md` | Active | - | current |
";

fn valid_plans() -> MemoryPlans {
    MemoryPlans::new()
        .with(
            "old.md",
            "**Lifecycle:** Superseded\n\nSuperseded by `new.md`.\n",
        )
        .with("new.md", "**Lifecycle:** Active\n\nCurrent plan.\n")
}

#[test]
fn valid_registry_yields_no_findings() {
    let findings = run(VALID_TABLE, &valid_plans());
    assert!(findings.is_empty(), "unexpected: {findings:?}");
}

#[test]
fn missing_back_reference_is_exactly_one_finding() {
    let plans = MemoryPlans::new()
        .with("old.md", "**Lifecycle:** Superseded\n\nNo citation here.\n")
        .with("new.md", "**Lifecycle:** Active\n");
    let findings = run(VALID_TABLE, &plans);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::UnreferencedSupersession);
}

#[test]
fn empty_history_and_missing_marker_are_both_reported() {
    let table = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| `solo.md` | Active | - | only plan |
";
    let plans = MemoryPlans::new().with("solo.md", "no marker here\n");
    let findings = run(table, &plans);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::MissingLifecycleMarker);
    assert_eq!(findings[1].kind, FindingKind::EmptyHistory);
}

#[test]
fn empty_registry_is_a_single_finding() {
    let findings = run("| Plan | Status | Superseded By | Notes |\n", &MemoryPlans::new());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::EmptyHistory);
}

#[test]
fn invalid_plan_path_skips_rest_of_row() {
    let table = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| unquoted.md | Superseded | `new.md` | bad cell |
| `old.md` | Superseded | `new.md` | fine |
";
    let plans = valid_plans();
    let findings = run(table, &plans);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::InvalidStatusValue);
    assert!(findings[0].message.contains("unquoted.md"));
}

#[test]
fn invalid_status_still_checks_file_existence() {
    let table = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| `gone.md` | Retired | - | typo'd status |
| `old.md` | Superseded | `new.md` | fine |
";
    let findings = run(table, &valid_plans());
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::InvalidStatusValue);
    assert_eq!(findings[1].kind, FindingKind::MissingFile);
}

#[test]
fn superseded_without_target_cell() {
    let table = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| `old.md` | Superseded | - | no target |
";
    let plans = MemoryPlans::new().with("old.md", "**Lifecycle:** Superseded\n");
    let findings = run(table, &plans);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::DanglingReference);
    assert!(findings[0].message.contains("Superseded By"));
}

#[test]
fn dangling_target_and_missing_citation_accumulate() {
    let table = "\
| Plan | Status | Superseded By | Notes |
| --- | --- | --- | --- |
| `old.md` | Superseded | `ghost.md` | target gone |
";
    let plans = MemoryPlans::new().with("old.md", "**Lifecycle:** Superseded\n");
    let findings = run(table, &plans);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::DanglingReference);
    assert_eq!(findings[1].kind, FindingKind::UnreferencedSupersession);
}

#[test]
fn status_round_trip() {
    for status in [
        LifecycleStatus::Active,
        LifecycleStatus::Superseded,
        LifecycleStatus::Archived,
    ] {
        assert_eq!(status.to_string().parse::<LifecycleStatus>().unwrap(), status);
    }
    assert!("Retired".parse::<LifecycleStatus>().is_err());
}
