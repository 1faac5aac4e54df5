//! Release notes rendering
//!
//! Produces the canonical milestone notes document: a Milestone block with
//! version and roadmap provenance, a fixed Release Summary, then one section
//! per Keep a Changelog category with the collected entries or `- None`.

use crate::collect::{collect_category_items, CATEGORIES};
use crate::error::RenderError;
use docgov_markdown::{bold_date_field, bold_field, extract_section};

const UNRELEASED_HEADING: &str = "## [Unreleased]";
const PHASE_LABEL: &str = "Current Phase";
const UPDATED_LABEL: &str = "Last Updated";

/// Roadmap facts stamped into the Milestone block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapStamp {
    /// Current roadmap phase, verbatim
    pub phase: String,
    /// Roadmap last-updated date, `YYYY-MM-DD`
    pub last_updated: String,
}

/// Read the phase and last-updated date the notes must cite.
///
/// Errors when either field is missing or the date is not date-shaped.
pub fn roadmap_stamp(roadmap: &str) -> Result<RoadmapStamp, RenderError> {
    let phase = bold_field(roadmap, PHASE_LABEL).ok_or(RenderError::IncompleteRoadmap)?;
    let last_updated =
        bold_date_field(roadmap, UPDATED_LABEL).ok_or(RenderError::IncompleteRoadmap)?;
    Ok(RoadmapStamp {
        phase: phase.to_string(),
        last_updated: last_updated.to_string(),
    })
}

/// Render the canonical release notes for one version.
///
/// Inputs are the raw roadmap and changelog texts; the changelog's
/// `[Unreleased]` body supplies every entry. Output always ends with exactly
/// one trailing newline.
pub fn render_release_notes(
    version: &str,
    roadmap: &str,
    changelog: &str,
) -> Result<String, RenderError> {
    let unreleased =
        extract_section(changelog, UNRELEASED_HEADING).ok_or(RenderError::MissingUnreleased)?;
    let stamp = roadmap_stamp(roadmap)?;
    let items = collect_category_items(unreleased);

    let mut lines: Vec<String> = Vec::new();
    lines.push("## Milestone".to_string());
    lines.push(format!("- Version: {version}"));
    lines.push(format!("- Roadmap phase: {}", stamp.phase));
    lines.push(format!("- Roadmap last updated: {}", stamp.last_updated));
    lines.push(String::new());
    lines.push("## Release Summary".to_string());
    lines.push("- Notes generated from `CHANGELOG.md` `[Unreleased]` entries.".to_string());
    lines.push("- Sections follow Keep a Changelog categories.".to_string());
    lines.push(String::new());

    for category in CATEGORIES {
        lines.push(format!("### {category}"));
        let entries = &items[category];
        if entries.is_empty() {
            lines.push("- None".to_string());
        } else {
            lines.extend(entries.iter().cloned());
        }
        lines.push(String::new());
    }

    tracing::debug!(version, "rendered release notes");
    Ok(format!("{}\n", lines.join("\n").trim_end()))
}
