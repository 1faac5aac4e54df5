//! Release-notes template heading check
//!
//! The template must advertise every heading the renderer emits, so that
//! generated notes and the hand-maintained template never drift apart.

use crate::findings::{Finding, FindingKind};

/// Headings the release-notes template must contain, in rendered order
pub const REQUIRED_TEMPLATE_HEADINGS: [&str; 8] = [
    "## Milestone",
    "## Release Summary",
    "### Added",
    "### Changed",
    "### Deprecated",
    "### Removed",
    "### Fixed",
    "### Security",
];

/// One finding per required heading absent from the template text.
pub fn validate_release_template(template: &str, findings: &mut Vec<Finding>) {
    for heading in REQUIRED_TEMPLATE_HEADINGS {
        if !template.contains(heading) {
            findings.push(Finding::new(
                FindingKind::MissingTemplateHeading,
                format!("Release notes template missing required heading '{heading}'"),
            ));
        }
    }
}
