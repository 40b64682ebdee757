//! TypeScript parsing errors.

use super::error_code::{self, LodeErrorCode};

/// Errors that can occur while parsing the source into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load TypeScript grammar: {0}")]
    Grammar(String),

    #[error("Syntax error in {path} at line {line}")]
    Syntax { path: String, line: usize },

    #[error("Parser returned no tree for {path}")]
    NoTree { path: String },
}

impl LodeErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
