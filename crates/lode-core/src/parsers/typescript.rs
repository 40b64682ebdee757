//! TypeScript parser using native tree-sitter.
//!
//! Produces a [`ParsedFile`] that owns both the tree and the source text,
//! so downstream stages can slice exact byte spans out of the original.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::errors::ParseError;

/// TypeScript parser.
pub struct TypeScriptParser {
    parser: Parser,
}

impl TypeScriptParser {
    /// Create a new TypeScript parser.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse TypeScript source, rejecting files with syntax errors.
    ///
    /// ERROR and MISSING nodes are fatal: a tree containing them cannot be
    /// sliced by byte span with any confidence.
    pub fn parse(&mut self, source: String, path: &Path) -> Result<ParsedFile, ParseError> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.display().to_string(),
            })?;

        if tree.root_node().has_error() {
            let line = first_error_line(tree.root_node()).unwrap_or(0);
            return Err(ParseError::Syntax {
                path: path.display().to_string(),
                line,
            });
        }

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}

/// A parsed TypeScript file: the syntax tree plus the text it came from.
#[derive(Debug)]
pub struct ParsedFile {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl ParsedFile {
    /// Root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Path the file was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Exact source text of a node.
    pub fn text_of(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Line (1-based) of the first ERROR or MISSING node, depth-first.
fn first_error_line(root: Node<'_>) -> Option<usize> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push(child);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<ParsedFile, ParseError> {
        TypeScriptParser::new()
            .unwrap()
            .parse(source.to_string(), Path::new("test.ts"))
    }

    #[test]
    fn parses_valid_source() {
        let parsed = parse("const X = 1;\nexport const Y = [1, 2];\n").unwrap();
        assert_eq!(parsed.root().kind(), "program");
        assert_eq!(parsed.root().named_child_count(), 2);
    }

    #[test]
    fn rejects_syntax_errors() {
        let err = parse("const X = {;\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn type_annotations_parse() {
        let parsed = parse("const X: Record<string, number> = { a: 1 };\n").unwrap();
        assert_eq!(parsed.root().named_child_count(), 1);
    }
}
