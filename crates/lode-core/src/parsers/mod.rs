//! Tree-sitter parser subsystem — TypeScript only.

mod typescript;

pub use typescript::{ParsedFile, TypeScriptParser};
