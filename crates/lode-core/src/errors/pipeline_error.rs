//! Pipeline errors.

use super::error_code::LodeErrorCode;
use super::{EvalError, ExtractError, JsonError, ParseError, SnippetError, SourceError};

/// Errors that can occur during an extraction run.
/// Aggregates stage errors via `From` conversions; every one is fatal to
/// the single-shot process, none are retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Snippet error: {0}")]
    Snippet(#[from] SnippetError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Serialization error: {0}")]
    Json(#[from] JsonError),
}

impl LodeErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Extract(e) => e.error_code(),
            Self::Snippet(e) => e.error_code(),
            Self::Eval(e) => e.error_code(),
            Self::Json(e) => e.error_code(),
        }
    }
}
