//! The single extraction pass: source → parse → extract → snippet → eval → render.

use std::path::Path;

use crate::errors::PipelineError;
use crate::eval::Evaluator;
use crate::extractor::ConstantExtractor;
use crate::json;
use crate::parsers::TypeScriptParser;
use crate::snippet::Snippet;
use crate::source::read_source;

/// Extract the named top-level `const` from `path` and return its value as
/// one line of compact JSON.
///
/// Every stage failure is fatal; nothing is retried (the run is local,
/// deterministic, and single-shot).
pub fn extract_value(path: &Path, name: &str) -> Result<String, PipelineError> {
    let source = read_source(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "source loaded");

    let mut parser = TypeScriptParser::new()?;
    let parsed = parser.parse(source, path)?;

    let decl = ConstantExtractor::new().extract(&parsed, name)?;

    let snippet = Snippet::build(&parsed, &decl)?;
    tracing::debug!(bytes = snippet.text.len(), line = decl.line, "snippet assembled");

    let value = Evaluator::new(&parsed).eval_declaration(&decl)?;
    let rendered = json::render(&value)?;
    Ok(rendered)
}
