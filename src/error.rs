//! Error types for parsing and exporting

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a WXR document into [`crate::content::Posts`]
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid input: document is empty")]
    InvalidInput,

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Errors raised while writing posts to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize front-matter for post {id} ({slug}): {source}")]
    FrontMatter {
        id: String,
        slug: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write post {id} ({slug}) to {}: {source}", path.display())]
    Write {
        id: String,
        slug: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Whether the error concerns a single post rather than the whole export
    pub fn is_per_post(&self) -> bool {
        !matches!(self, ExportError::CreateDir { .. })
    }
}
