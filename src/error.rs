//! Error types for the dynobj library
//!
//! Path resolution reports two distinct failures: a missing node
//! ([`DynObjError::NotFound`]) and a sequence segment that is not an index
//! ([`DynObjError::MalformedIndex`]). The remaining variants cover document
//! construction.

use crate::core::path::Path;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum DynObjError {
    /// A map key was missing, a sequence index was out of range, or a
    /// scalar was indexed into
    #[error("Not found: {path}")]
    NotFound {
        /// Path prefix up to and including the failing segment
        path: Path,
        /// Index of the failing segment
        depth: usize,
    },

    /// A segment applied to a sequence is not a non-negative integer
    #[error("Malformed index {segment:?}: {source}")]
    MalformedIndex {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: PathBuf },

    /// The document format could not be determined from the file name
    #[error("Unsupported document format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The document exceeds the configured size limit
    #[error("Document too large: {size} bytes (limit: {limit} bytes)")]
    DocumentTooLarge { size: u64, limit: usize },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DynObjError>;

impl DynObjError {
    /// Create a not found error for the segment at `depth` of `path`
    pub fn not_found(path: &Path, depth: usize) -> Self {
        Self::NotFound {
            path: path.prefix(depth + 1),
            depth,
        }
    }

    /// Create a malformed index error
    pub fn malformed_index(segment: impl Into<String>, source: ParseIntError) -> Self {
        Self::MalformedIndex {
            segment: segment.into(),
            source,
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new not a file error
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Check if this error means the path simply does not exist in the tree
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
