//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not valid JSON or does not match the schema
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record has an empty identifier
    #[error("Blank {kind} identifier at position {position}")]
    BlankId { kind: &'static str, position: usize },

    /// Two records of the same kind share an identifier
    #[error("Duplicate {kind} identifier '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}
