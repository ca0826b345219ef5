//! Error types for Meander.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Meander operations.
pub type Result<T> = std::result::Result<T, MeanderError>;

/// Errors that can occur in Meander.
#[derive(Debug, Error)]
pub enum MeanderError {
    /// Failed to open the route file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the route file could not be parsed.
    #[error("Parse error at {path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The route file contained no stops.
    #[error("Empty route: no first/last stop to close the tour")]
    EmptyRoute,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeanderError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error for a given line of the route file.
    pub fn parse(path: PathBuf, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path,
            line,
            message: message.into(),
        }
    }
}
