//! Types for declaration extraction.

use std::ops::Range;

use serde::Serialize;

/// The matched `const` declaration.
///
/// Transient: produced by the filter step, consumed by the snippet builder
/// and evaluator, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDeclaration {
    /// Identifier bound by the first declarator.
    pub name: String,
    /// Byte span of the declaration statement in the original source,
    /// terminating semicolon included when present.
    pub span: Range<usize>,
    /// 1-based line the declaration starts on.
    pub line: usize,
    /// Whether the declaration was wrapped in a top-level `export`.
    pub exported: bool,
}
