//! Accumulated governance findings
//!
//! Validation never raises for expected document defects; every problem is an
//! ordered [`Finding`] so that one run surfaces everything at once. Fail-fast
//! errors are reserved for the generation path, which lives elsewhere.

use serde::Serialize;

/// Classification of a governance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A required input file does not exist
    MissingFile,
    /// A required heading-delimited section or sub-block is absent
    MissingSection,
    /// A required metadata declaration line is absent
    MissingMetadataField,
    /// A metadata declaration exists but its value is not `YYYY-MM-DD`
    MalformedDate,
    /// A table cell holds a value outside its closed enumeration or shape
    InvalidStatusValue,
    /// A plan file does not carry the lifecycle marker its registry row claims
    MissingLifecycleMarker,
    /// A referenced file (link or supersession target) does not exist
    DanglingReference,
    /// A supersession target exists but is not cited in the superseded plan
    UnreferencedSupersession,
    /// Roadmap and changelog disagree on phase or last-updated date
    AlignmentMismatch,
    /// The registry records no supersession history at all
    EmptyHistory,
    /// The release-notes template lacks a required heading
    MissingTemplateHeading,
}

impl FindingKind {
    /// Stable snake_case tag, matching the JSON report encoding
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingFile => "missing_file",
            Self::MissingSection => "missing_section",
            Self::MissingMetadataField => "missing_metadata_field",
            Self::MalformedDate => "malformed_date",
            Self::InvalidStatusValue => "invalid_status_value",
            Self::MissingLifecycleMarker => "missing_lifecycle_marker",
            Self::DanglingReference => "dangling_reference",
            Self::UnreferencedSupersession => "unreferenced_supersession",
            Self::AlignmentMismatch => "alignment_mismatch",
            Self::EmptyHistory => "empty_history",
            Self::MissingTemplateHeading => "missing_template_heading",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One governance finding: a tagged, human-readable defect description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Machine-readable classification
    pub kind: FindingKind,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Create a finding
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
