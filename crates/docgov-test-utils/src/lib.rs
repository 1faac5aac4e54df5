//! Testing utilities for the docgov workspace
//!
//! Shared fixtures: canned valid documents, an in-memory plan source, and an
//! on-disk documentation tree builder.

#![allow(missing_docs)]

use docgov_checks::{GovernanceConfig, PlanSource};
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;

/// In-memory plan documents, keyed by registry-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlans {
    files: BTreeMap<String, String>,
}

impl MemoryPlans {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, rel: &str, text: &str) -> Self {
        self.files.insert(rel.to_string(), text.to_string());
        self
    }
}

impl PlanSource for MemoryPlans {
    fn exists(&self, rel: &str) -> bool {
        self.files.contains_key(rel)
    }

    fn read(&self, rel: &str) -> Option<String> {
        self.files.get(rel).cloned()
    }
}

pub fn sample_roadmap(phase: &str, updated: &str) -> String {
    format!(
        "# Project Roadmap\n\n\
         **Current Phase:** {phase}\n\
         **Last Updated:** {updated}\n\n\
         ## Plans\n\n\
         - [Storage plan](../plans/plan-002-storage.md)\n"
    )
}

pub fn sample_changelog(phase: &str, updated: &str) -> String {
    format!(
        "# Changelog\n\n\
         ## [Unreleased]\n\n\
         ### Roadmap Alignment\n\
         - Current roadmap phase: {phase}\n\
         - Roadmap last updated: {updated}\n\n\
         ### Added\n\
         - Storage backend scaffolding\n\n\
         ### Fixed\n\
         - Registry parsing of trailing pipes\n\n\
         ## [0.1.0] - 2024-01-15\n\n\
         ### Added\n\
         - Initial release\n"
    )
}

pub fn sample_registry() -> String {
    "| Plan | Status | Superseded By | Notes |\n\
     | --- | --- | --- | --- |\n\
     | `plan-001-initial.md` | Superseded | `plan-002-storage.md` | replaced in M2 |\n\
     | `plan-002-storage.md` | Active | - | current direction |\n"
        .to_string()
}

pub fn sample_superseded_plan() -> String {
    "# Initial Plan\n\n\
     **Lifecycle:** Superseded\n\n\
     Superseded by `plan-002-storage.md`.\n"
        .to_string()
}

pub fn sample_active_plan() -> String {
    "# Storage Plan\n\n\
     **Lifecycle:** Active\n\n\
     Current direction.\n"
        .to_string()
}

pub fn sample_template() -> String {
    "# Release Notes Template\n\n\
     ## Milestone\n\n\
     ## Release Summary\n\n\
     ### Added\n\n\
     ### Changed\n\n\
     ### Deprecated\n\n\
     ### Removed\n\n\
     ### Fixed\n\n\
     ### Security\n"
        .to_string()
}

/// A complete, valid documentation tree on disk.
///
/// Built from the canned fixtures; individual files can be overwritten to
/// seed specific defects before running the checks.
pub struct DocsTree {
    dir: TempDir,
}

impl DocsTree {
    /// Build a tree that passes every governance check.
    #[must_use]
    pub fn valid() -> Self {
        let tree = Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        };
        tree.write("docs/project/roadmap.md", &sample_roadmap("M3", "2024-05-01"));
        tree.write("CHANGELOG.md", &sample_changelog("M3", "2024-05-01"));
        tree.write("docs/plans/PLAN_LIFECYCLE.md", &sample_registry());
        tree.write("docs/plans/plan-001-initial.md", &sample_superseded_plan());
        tree.write("docs/plans/plan-002-storage.md", &sample_active_plan());
        tree.write(
            "docs/project/RELEASE_NOTES_TEMPLATE.md",
            &sample_template(),
        );
        tree
    }

    /// Write (or overwrite) a file at a root-relative path.
    pub fn write(&self, rel: &str, text: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, text).expect("write fixture file");
    }

    /// Remove a file at a root-relative path.
    pub fn remove(&self, rel: &str) {
        std::fs::remove_file(self.dir.path().join(rel)).expect("remove fixture file");
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn config(&self) -> GovernanceConfig {
        GovernanceConfig::for_root(self.dir.path())
    }
}
