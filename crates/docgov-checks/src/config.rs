//! Explicit path configuration
//!
//! Every validator receives the paths it needs through this struct; there are
//! no process-wide path constants, so tests can point the whole engine at a
//! temporary tree.

use std::path::{Path, PathBuf};

/// Paths to every governed documentation artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceConfig {
    /// Repository root all defaults are resolved under
    pub root: PathBuf,
    /// Roadmap document
    pub roadmap: PathBuf,
    /// Changelog document
    pub changelog: PathBuf,
    /// Plan-lifecycle registry document
    pub plan_lifecycle: PathBuf,
    /// Release-notes template document
    pub release_template: PathBuf,
    /// Directory holding the individual plan documents
    pub plans_dir: PathBuf,
}

impl GovernanceConfig {
    /// Configuration for the conventional documentation layout under `root`.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            roadmap: root.join("docs/project/roadmap.md"),
            changelog: root.join("CHANGELOG.md"),
            plan_lifecycle: root.join("docs/plans/PLAN_LIFECYCLE.md"),
            release_template: root.join("docs/project/RELEASE_NOTES_TEMPLATE.md"),
            plans_dir: root.join("docs/plans"),
            root,
        }
    }

    /// Directory relative links in the roadmap resolve against.
    #[must_use]
    pub fn roadmap_base_dir(&self) -> &Path {
        self.roadmap.parent().unwrap_or(Path::new("."))
    }
}
