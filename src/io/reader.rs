//! Document reading and parsing
//!
//! This module turns JSON or YAML text into a queryable [`DynObj`]. The
//! whole document is parsed before any query is possible.

use crate::core::DynObj;
use crate::error::{DynObjError, Result};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Serialization format of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Configuration for the document reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Format to parse with; inferred from the file extension when `None`
    pub format: Option<DocumentFormat>,
    /// Maximum document size to read (in bytes)
    pub max_document_size: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            format: None,
            max_document_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

/// Document reader
#[derive(Debug, Clone, Default)]
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<DynObj> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DynObjError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(DynObjError::not_a_file(path));
        }

        let format = self
            .config
            .format
            .or_else(|| DocumentFormat::from_path(path))
            .ok_or_else(|| DynObjError::unsupported_format(path))?;

        let size = fs::metadata(path)?.len();
        self.check_size(size)?;

        debug!("Reading {:?} document from {}", format, path.display());
        let content = fs::read_to_string(path)?;
        self.parse_content(&content, format)
    }

    /// Read a document from any reader
    ///
    /// Reads at most one byte past the size limit so an oversized input is
    /// rejected without buffering all of it.
    pub fn read_from<R: Read>(&self, reader: R, format: DocumentFormat) -> Result<DynObj> {
        let mut content = Vec::new();
        match self.config.max_document_size {
            Some(limit) => {
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                reader.take(cap).read_to_end(&mut content)?;
            }
            None => {
                let mut reader = reader;
                reader.read_to_end(&mut content)?;
            }
        }
        self.check_size(content.len() as u64)?;

        let obj = match format {
            DocumentFormat::Json => DynObj::from_json_slice(&content)?,
            DocumentFormat::Yaml => DynObj::from_yaml_slice(&content)?,
        };
        debug!("Read {} bytes of {:?}", content.len(), format);
        Ok(obj)
    }

    /// Parse a document from string content
    pub fn parse_content(&self, content: &str, format: DocumentFormat) -> Result<DynObj> {
        self.check_size(content.len() as u64)?;

        let obj = match format {
            DocumentFormat::Json => DynObj::from_json_str(content)?,
            DocumentFormat::Yaml => DynObj::from_yaml_str(content)?,
        };
        debug!("Parsed {} bytes of {:?}", content.len(), format);
        Ok(obj)
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn check_size(&self, size: u64) -> Result<()> {
        match self.config.max_document_size {
            Some(limit) if size > limit as u64 => {
                Err(DynObjError::DocumentTooLarge { size, limit })
            }
            _ => Ok(()),
        }
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Parse a JSON document with default settings
    pub fn parse_json(content: &str) -> Result<DynObj> {
        DocumentReader::new().parse_content(content, DocumentFormat::Json)
    }

    /// Parse a YAML document with default settings
    pub fn parse_yaml(content: &str) -> Result<DynObj> {
        DocumentReader::new().parse_content(content, DocumentFormat::Yaml)
    }

    /// Read a document from a file path with default settings
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<DynObj> {
        DocumentReader::new().read_file(path)
    }
}
