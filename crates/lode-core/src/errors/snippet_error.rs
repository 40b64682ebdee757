//! Standalone snippet validation errors.

use super::error_code::{self, LodeErrorCode};

/// Errors raised when the sliced declaration plus its trailing reference
/// does not re-parse as a valid two-statement program.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("Extracted snippet is not valid TypeScript: {message}")]
    Invalid { message: String },
}

impl LodeErrorCode for SnippetError {
    fn error_code(&self) -> &'static str {
        error_code::SNIPPET_ERROR
    }
}
