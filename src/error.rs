//! Error types for schemaview

use thiserror::Error;

/// Result type alias for schemaview operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Viewer error types
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    #[error("no such snippet or file: {0}")]
    UnknownSnippet(String),

    #[error("invalid theme: {0}")]
    Theme(String),

    #[error("{0}")]
    Usage(String),
}
