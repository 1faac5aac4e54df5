//! docgov Markdown Layer
//!
//! Line-anchored extraction primitives shared by the governance checks and
//! the release-notes renderer.
//!
//! # Core Concepts
//!
//! - [`Document`]: An immutable text blob plus its logical path
//! - [`extract_section`]: Heading-delimited body slices with rank tracking
//! - [`bold_field`] / [`bullet_field`]: Single-line `label: value` metadata
//! - [`parse_table_rows`]: Pipe-table rows with header/separator filtering
//!
//! Every extraction here is a single line-anchored pass over the source text.
//! There is deliberately no event-based markdown parsing: the governed
//! documents are hand-edited, and the checks must inspect exactly the textual
//! shapes they promise to inspect, nothing more.

// Core modules
mod document;
mod metadata;
mod section;
mod table;

// Re-exports
pub use document::{Document, DocumentError};
pub use metadata::{
    bold_date_field, bold_field, bold_field_present, bullet_date_field, bullet_field,
    bullet_field_present, is_date_shaped,
};
pub use section::{extract_section, heading_rank};
pub use table::{parse_path_cell, parse_table_rows, PathCell, TableRow};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
