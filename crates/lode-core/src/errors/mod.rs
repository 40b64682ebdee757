//! Error handling for lode.
//! One error enum per stage, `thiserror` only, zero `anyhow`.

pub mod error_code;
pub mod eval_error;
pub mod extract_error;
pub mod json_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod snippet_error;
pub mod source_error;

pub use error_code::LodeErrorCode;
pub use eval_error::EvalError;
pub use extract_error::ExtractError;
pub use json_error::JsonError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use snippet_error::SnippetError;
pub use source_error::SourceError;
