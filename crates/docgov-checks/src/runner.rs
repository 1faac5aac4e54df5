//! Top-level check driver
//!
//! Loads every governed document once, runs each validator, and aggregates
//! their findings into one report. Validators are independent: a defect in
//! one artifact never hides defects in another.

use crate::alignment::validate_alignment;
use crate::config::GovernanceConfig;
use crate::findings::{Finding, FindingKind};
use crate::lifecycle::{validate_lifecycle, REGISTRY_HEADER_LABEL};
use crate::links::validate_roadmap_links;
use crate::source::FsPlanSource;
use crate::template::validate_release_template;
use docgov_markdown::{parse_table_rows, Document};
use serde::Serialize;
use std::path::Path;

/// Aggregated result of one governance run
#[derive(Debug, Default, Serialize)]
pub struct GovernanceReport {
    /// Every finding, in discovery order
    pub findings: Vec<Finding>,
}

impl GovernanceReport {
    /// Whether the run surfaced no findings
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Human-readable report text, one line per finding
    #[must_use]
    pub fn generate_text(&self) -> String {
        if self.passed() {
            return "Docs governance checks passed.".to_string();
        }
        let mut lines = vec!["Docs governance checks failed:".to_string()];
        for finding in &self.findings {
            lines.push(format!("- {finding}"));
        }
        lines.join("\n")
    }

    /// Machine-readable JSON report
    #[must_use]
    pub fn generate_json(&self) -> String {
        let payload = serde_json::json!({
            "passed": self.passed(),
            "findings": self.findings,
        });
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Load a document, converting load failures into findings.
fn load_document(path: &Path, findings: &mut Vec<Finding>) -> Option<Document> {
    match Document::load(path) {
        Ok(doc) => Some(doc),
        Err(err) => {
            findings.push(Finding::new(FindingKind::MissingFile, err.to_string()));
            None
        }
    }
}

/// Run every governance check over the configured documentation tree.
///
/// Findings accumulate in discovery order: file loads, roadmap links,
/// roadmap/changelog alignment, plan lifecycle, template headings.
#[must_use]
pub fn run_checks(config: &GovernanceConfig) -> GovernanceReport {
    let mut findings = Vec::new();

    let roadmap = load_document(&config.roadmap, &mut findings);
    let changelog = load_document(&config.changelog, &mut findings);

    if let Some(roadmap) = &roadmap {
        validate_roadmap_links(roadmap.text(), config.roadmap_base_dir(), &mut findings);
        if let Some(changelog) = &changelog {
            validate_alignment(roadmap.text(), changelog.text(), &mut findings);
        }
    }

    if let Some(registry) = load_document(&config.plan_lifecycle, &mut findings) {
        let rows = parse_table_rows(registry.text(), REGISTRY_HEADER_LABEL);
        let plans = FsPlanSource::new(&config.plans_dir);
        validate_lifecycle(&rows, &plans, &mut findings);
    }

    if let Some(template) = load_document(&config.release_template, &mut findings) {
        validate_release_template(template.text(), &mut findings);
    }

    tracing::info!(
        findings = findings.len(),
        root = %config.root.display(),
        "governance checks complete"
    );
    GovernanceReport { findings }
}
