//! Plan lifecycle validation
//!
//! The registry table claims a status for every plan document; each plan also
//! carries its own lifecycle marker line. Both sides must agree, and every
//! supersession must be bidirectional: the registry names the successor, and
//! the superseded plan cites it in its own text.

use crate::findings::{Finding, FindingKind};
use crate::source::PlanSource;
use docgov_markdown::{parse_path_cell, PathCell, TableRow};
use std::str::FromStr;

/// First-column title identifying the registry table's header row
pub const REGISTRY_HEADER_LABEL: &str = "Plan";

/// Literal marker an Active plan must carry in its own text
pub const ACTIVE_MARKER: &str = "**Lifecycle:** Active";
/// Literal marker a Superseded plan must carry in its own text
pub const SUPERSEDED_MARKER: &str = "**Lifecycle:** Superseded";

/// Closed enumeration of plan lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStatus {
    /// Plan is in force
    Active,
    /// Plan has been replaced by a successor
    Superseded,
    /// Plan is retired without a successor
    Archived,
}

/// Status cell held a value outside the closed enumeration
#[derive(Debug, thiserror::Error)]
#[error("unknown lifecycle status: {0}")]
pub struct UnknownStatus(String);

impl FromStr for LifecycleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Superseded" => Ok(Self::Superseded),
            "Archived" => Ok(Self::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Active => "Active",
            Self::Superseded => "Superseded",
            Self::Archived => "Archived",
        })
    }
}

/// One registry row, partially parsed.
///
/// `status` is `None` when the cell held an unknown value; the finding for
/// that is emitted during conversion, and the remaining per-row checks still
/// run so one bad cell does not hide a missing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEntry {
    /// Registry-relative plan path from the code-quoted first cell
    pub plan: String,
    /// Parsed status, if the cell was valid
    pub status: Option<LifecycleStatus>,
    /// Raw third cell; parsed lazily, only Superseded rows need it
    pub superseded_by_cell: String,
    /// Free-text notes cell
    pub notes: String,
}

impl LifecycleEntry {
    /// Convert a table row, accumulating findings for malformed cells.
    ///
    /// Returns `None` when the plan-path cell is unusable; all later checks
    /// for the row are skipped since there is nothing to check against.
    pub fn from_row(row: &TableRow, findings: &mut Vec<Finding>) -> Option<Self> {
        let Some(PathCell::Path(plan)) = parse_path_cell(row.cell(0)) else {
            findings.push(Finding::new(
                FindingKind::InvalidStatusValue,
                format!("Invalid plan path cell in lifecycle registry: '{}'", row.cell(0)),
            ));
            return None;
        };

        let status = match row.cell(1).parse::<LifecycleStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                findings.push(Finding::new(
                    FindingKind::InvalidStatusValue,
                    format!(
                        "Invalid lifecycle status '{}' for plan '{}' (allowed: Active, Archived, Superseded)",
                        row.cell(1),
                        plan
                    ),
                ));
                None
            }
        };

        Some(Self {
            plan,
            status,
            superseded_by_cell: row.cell(2).to_string(),
            notes: row.cell(3).to_string(),
        })
    }
}

/// Validate every registry row against the plan documents.
///
/// Batch semantics: all rows are processed and all findings accumulate; no
/// row's failure prevents evaluation of subsequent rows. After the pass, a
/// registry with no Superseded row at all is itself a finding — the registry
/// exists to record supersession history.
pub fn validate_lifecycle(rows: &[TableRow], plans: &dyn PlanSource, findings: &mut Vec<Finding>) {
    if rows.is_empty() {
        findings.push(Finding::new(
            FindingKind::EmptyHistory,
            "Lifecycle registry must define at least one row",
        ));
        return;
    }

    let mut superseded_count = 0usize;

    for row in rows {
        let Some(entry) = LifecycleEntry::from_row(row, findings) else {
            continue;
        };

        let Some(text) = plans.read(&entry.plan) else {
            findings.push(Finding::new(
                FindingKind::MissingFile,
                format!("Lifecycle entry references missing plan file: {}", entry.plan),
            ));
            continue;
        };

        match entry.status {
            Some(LifecycleStatus::Superseded) => {
                superseded_count += 1;
                validate_superseded(&entry, &text, plans, findings);
            }
            Some(LifecycleStatus::Active) => {
                if !text.contains(ACTIVE_MARKER) {
                    findings.push(Finding::new(
                        FindingKind::MissingLifecycleMarker,
                        format!("Active plan missing lifecycle marker: {}", entry.plan),
                    ));
                }
            }
            Some(LifecycleStatus::Archived) | None => {}
        }
    }

    if superseded_count == 0 {
        findings.push(Finding::new(
            FindingKind::EmptyHistory,
            "Lifecycle registry should include at least one Superseded entry",
        ));
    }
    tracing::debug!(rows = rows.len(), superseded = superseded_count, "lifecycle rows checked");
}

fn validate_superseded(
    entry: &LifecycleEntry,
    plan_text: &str,
    plans: &dyn PlanSource,
    findings: &mut Vec<Finding>,
) {
    if !plan_text.contains(SUPERSEDED_MARKER) {
        findings.push(Finding::new(
            FindingKind::MissingLifecycleMarker,
            format!("Superseded plan missing lifecycle marker: {}", entry.plan),
        ));
    }

    let Some(PathCell::Path(target)) = parse_path_cell(&entry.superseded_by_cell) else {
        findings.push(Finding::new(
            FindingKind::DanglingReference,
            format!("Superseded plan must define a 'Superseded By' target: {}", entry.plan),
        ));
        return;
    };

    // Existence and citation are independent defects; once the plan file is
    // known, neither check short-circuits the other.
    if !plans.exists(&target) {
        findings.push(Finding::new(
            FindingKind::DanglingReference,
            format!("Superseded target does not exist: {target}"),
        ));
    }
    if !plan_text.contains(&target) {
        findings.push(Finding::new(
            FindingKind::UnreferencedSupersession,
            format!(
                "Superseded plan '{}' does not cite its successor '{target}'",
                entry.plan
            ),
        ));
    }
}

// Unit tests live in tests/lifecycle.rs: they exercise the checks through
// `docgov_test_utils::MemoryPlans`, whose `PlanSource` impl is for the
// externally-compiled crate and cannot unify with the in-crate trait inside
// a `#[cfg(test)]` build.
