//! Source file loading errors.

use super::error_code::{self, LodeErrorCode};

/// Errors that can occur while loading the input file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Unreadable { path: String, message: String },
}

impl LodeErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
