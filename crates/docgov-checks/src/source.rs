//! Plan document access
//!
//! The lifecycle validator reads individual plan files through this seam so
//! tests can supply in-memory documents instead of a filesystem tree.

use std::path::PathBuf;

/// Access to plan documents by registry-relative path.
pub trait PlanSource {
    /// Whether a plan file exists
    fn exists(&self, rel: &str) -> bool;

    /// Read a plan file's text, `None` if absent or unreadable
    fn read(&self, rel: &str) -> Option<String>;
}

/// Plan documents stored under a directory on disk.
#[derive(Debug, Clone)]
pub struct FsPlanSource {
    root: PathBuf,
}

impl FsPlanSource {
    /// Source rooted at the plans directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PlanSource for FsPlanSource {
    fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }

    fn read(&self, rel: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(rel)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plan.md"), "**Lifecycle:** Active\n").unwrap();

        let source = FsPlanSource::new(dir.path());
        assert!(source.exists("plan.md"));
        assert!(!source.exists("other.md"));
        assert_eq!(source.read("other.md"), None);
        assert!(source.read("plan.md").unwrap().contains("Active"));
    }
}
