//! Rendering errors
//!
//! Unlike the governance checks, rendering fails fast: notes built from an
//! incomplete changelog or roadmap would be silently wrong, so the first
//! missing input aborts the run.

use thiserror::Error;

/// Errors that stop release-notes rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// The changelog has no `## [Unreleased]` section
    #[error("CHANGELOG.md is missing a [Unreleased] section")]
    MissingUnreleased,

    /// The roadmap lacks a usable phase or last-updated date
    #[error("Roadmap metadata is incomplete (Current Phase / Last Updated)")]
    IncompleteRoadmap,
}
