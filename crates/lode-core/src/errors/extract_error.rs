//! Declaration matching errors.

use super::error_code::{self, LodeErrorCode};

/// Errors raised when the target declaration count is not exactly one.
/// Both directions halt the run before any span is sliced.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No top-level `const {name}` declaration in {path}")]
    NotFound { name: String, path: String },

    #[error("Found {count} top-level `const {name}` declarations in {path}, expected exactly one")]
    Ambiguous {
        name: String,
        count: usize,
        path: String,
    },
}

impl LodeErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        error_code::CARDINALITY_ERROR
    }
}
