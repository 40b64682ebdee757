//! JSON serialization errors.

use super::error_code::{self, LodeErrorCode};

/// Errors raised while rendering the evaluated value as JSON.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("Value {value} has no JSON representation")]
    NonFinite { value: f64 },

    #[error("JSON encoding failed: {message}")]
    Render { message: String },
}

impl LodeErrorCode for JsonError {
    fn error_code(&self) -> &'static str {
        error_code::JSON_ERROR
    }
}
