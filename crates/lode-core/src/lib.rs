//! lode-core: pinned-constant extraction from TypeScript sources
//!
//! This crate provides the stages behind the `lode` CI binary:
//! - Source: input file loading
//! - Parsers: native tree-sitter TypeScript parsing
//! - Extractor: top-level `const` matching with an exactly-one rule
//! - Snippet: standalone declaration-plus-reference program assembly
//! - Eval: restricted literal-grammar interpretation
//! - Json: ordered, compact JSON rendering

pub mod errors;
pub mod eval;
pub mod extractor;
pub mod json;
pub mod parsers;
pub mod pipeline;
pub mod snippet;
pub mod source;

// Re-exports for convenience
pub use errors::{
    EvalError, ExtractError, JsonError, LodeErrorCode, ParseError, PipelineError, SnippetError,
    SourceError,
};
pub use eval::{Evaluator, LiteralValue};
pub use extractor::{ConstantExtractor, ExtractedDeclaration};
pub use parsers::{ParsedFile, TypeScriptParser};
pub use pipeline::extract_value;
pub use snippet::Snippet;
