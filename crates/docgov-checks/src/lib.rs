//! docgov Governance Checks
//!
//! The cross-artifact consistency engine: validates that the roadmap,
//! changelog, plan-lifecycle registry, and release-notes template agree on
//! the facts they share.
//!
//! # Core Operations
//!
//! - **Alignment**: roadmap phase/date must be echoed in the changelog's
//!   Roadmap Alignment block, character for character
//! - **Links**: every `../plans/*.md` reference in the roadmap must resolve
//! - **Lifecycle**: registry rows, in-file markers, and supersession
//!   back-references must agree
//! - **Template**: the release-notes template must carry all rendered headings
//!
//! # Error policy
//!
//! Validation accumulates: every defect is an ordered [`Finding`] and one run
//! reports them all. Nothing here raises for an expected document defect.
//!
//! # Example
//!
//! ```rust,ignore
//! use docgov_checks::{run_checks, GovernanceConfig};
//!
//! let report = run_checks(&GovernanceConfig::for_root("."));
//! println!("{}", report.generate_text());
//! std::process::exit(if report.passed() { 0 } else { 1 });
//! ```

// Core modules
pub mod alignment;
pub mod config;
pub mod findings;
pub mod lifecycle;
pub mod links;
pub mod runner;
pub mod source;
pub mod template;

// Re-exports for convenience
pub use alignment::{roadmap_metadata, validate_alignment, PHASE_LABEL, UNRELEASED_HEADING, UPDATED_LABEL};
pub use config::GovernanceConfig;
pub use findings::{Finding, FindingKind};
pub use lifecycle::{validate_lifecycle, LifecycleEntry, LifecycleStatus, REGISTRY_HEADER_LABEL};
pub use links::validate_roadmap_links;
pub use runner::{run_checks, GovernanceReport};
pub use source::{FsPlanSource, PlanSource};
pub use template::{validate_release_template, REQUIRED_TEMPLATE_HEADINGS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
