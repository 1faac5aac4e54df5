//! docgov Release Notes
//!
//! Renders canonical milestone release notes from the changelog's
//! `[Unreleased]` section and the roadmap's phase metadata.
//!
//! # Error policy
//!
//! Rendering fails fast with a [`RenderError`]: notes from incomplete inputs
//! would be silently wrong, so the first defect aborts the run.
//!
//! # Example
//!
//! ```rust
//! use docgov_notes::render_release_notes;
//!
//! let roadmap = "**Current Phase:** M1\n**Last Updated:** 2024-01-01\n";
//! let changelog = "## [Unreleased]\n\n### Added\n- First feature\n";
//! let notes = render_release_notes("v0.1.0", roadmap, changelog).unwrap();
//! assert!(notes.starts_with("## Milestone"));
//! ```

mod collect;
mod error;
mod render;

pub use collect::{collect_category_items, CATEGORIES};
pub use error::RenderError;
pub use render::{render_release_notes, roadmap_stamp, RoadmapStamp};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
