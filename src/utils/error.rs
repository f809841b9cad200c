//! Error handling for citation substitution
//!
//! This module provides a unified error type and result type for scanning,
//! parsing, and library-maintenance operations.

use std::fmt;

/// Citation substitution error type
#[derive(Debug, Clone)]
pub enum CiteError {
    /// A scanned span does not decompose into citations
    MalformedToken { snippet: String },
    /// A single citation does not match the scannable-cite field grammar
    MalformedCitation { snippet: String },
    /// The bibliography export could not be read or decoded
    InvalidBibliography { message: String },
    /// A library-client operation failed
    LibraryError { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for CiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CiteError::MalformedToken { snippet } => {
                write!(f, "Malformed citation token: '{}'", snippet)
            }
            CiteError::MalformedCitation { snippet } => {
                write!(f, "Malformed scannable citation: '{}'", snippet)
            }
            CiteError::InvalidBibliography { message } => {
                write!(f, "Invalid bibliography export: {}", message)
            }
            CiteError::LibraryError { message } => {
                write!(f, "Library error: {}", message)
            }
            CiteError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for CiteError {}

impl From<std::io::Error> for CiteError {
    fn from(err: std::io::Error) -> Self {
        CiteError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CiteError {
    fn from(err: serde_json::Error) -> Self {
        CiteError::InvalidBibliography {
            message: err.to_string(),
        }
    }
}

/// Result type for citation substitution operations
pub type CiteResult<T> = Result<T, CiteError>;

// Convenience constructors for errors
impl CiteError {
    pub fn malformed_token(snippet: impl Into<String>) -> Self {
        CiteError::MalformedToken {
            snippet: snippet.into(),
        }
    }

    pub fn malformed_citation(snippet: impl Into<String>) -> Self {
        CiteError::MalformedCitation {
            snippet: snippet.into(),
        }
    }

    pub fn invalid_bibliography(message: impl Into<String>) -> Self {
        CiteError::InvalidBibliography {
            message: message.into(),
        }
    }

    pub fn library(message: impl Into<String>) -> Self {
        CiteError::LibraryError {
            message: message.into(),
        }
    }
}
