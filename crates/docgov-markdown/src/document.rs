//! Immutable source documents
//!
//! A [`Document`] is read once from disk and never mutated. All extraction
//! functions in this crate operate on `&str` slices borrowed from it.

use std::path::{Path, PathBuf};

/// Errors while loading a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Document file does not exist
    #[error("missing required file: {0}")]
    Missing(PathBuf),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// An immutable UTF-8 text blob plus its logical path.
///
/// Loaded at validator start and discarded at process end; never persisted
/// and never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Create a document from already-loaded text.
    ///
    /// The path is a logical identifier only; it is not touched.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk.
    ///
    /// # Errors
    /// - `DocumentError::Missing` if the file does not exist
    /// - `DocumentError::Io` if the read fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DocumentError::Missing(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|e| DocumentError::io_error(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Logical path identifier
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full document text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
