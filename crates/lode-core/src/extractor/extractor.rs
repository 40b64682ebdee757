//! Top-level `const` filtering and the exactly-one cardinality rule.

use tree_sitter::Node;

use crate::errors::ExtractError;
use crate::parsers::ParsedFile;

use super::types::ExtractedDeclaration;

/// A top-level `const` statement, with its `export` wrapper noted.
pub(crate) struct TopLevelConst<'t> {
    pub decl: Node<'t>,
    pub exported: bool,
}

/// Collect every `const` declaration at the outermost scope of the file.
///
/// `export const X = …` counts: the export statement is the top-level child
/// and the declaration sits in its `declaration` field. Declarations nested
/// in functions, blocks, or namespaces are never visited.
pub(crate) fn top_level_consts(parsed: &ParsedFile) -> Vec<TopLevelConst<'_>> {
    let root = parsed.root();
    let mut cursor = root.walk();
    let mut found = Vec::new();

    for statement in root.named_children(&mut cursor) {
        match statement.kind() {
            "lexical_declaration" => {
                if is_const(statement, parsed) {
                    found.push(TopLevelConst {
                        decl: statement,
                        exported: false,
                    });
                }
            }
            "export_statement" => {
                if let Some(decl) = statement.child_by_field_name("declaration") {
                    if decl.kind() == "lexical_declaration" && is_const(decl, parsed) {
                        found.push(TopLevelConst {
                            decl,
                            exported: true,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    found
}

/// `let` declarations share the node kind; only the `const` form qualifies.
fn is_const(decl: Node<'_>, parsed: &ParsedFile) -> bool {
    decl.child_by_field_name("kind")
        .map(|kind| parsed.text_of(kind) == "const")
        .unwrap_or(false)
}

/// Name bound by the declaration's first declarator, if it is a plain
/// identifier. Destructuring patterns bind no single name and return None.
pub(crate) fn first_declarator_name<'t>(
    decl: Node<'t>,
    parsed: &'t ParsedFile,
) -> Option<&'t str> {
    let mut cursor = decl.walk();
    let declarator = decl
        .named_children(&mut cursor)
        .find(|n| n.kind() == "variable_declarator")?;
    let name = declarator.child_by_field_name("name")?;
    if name.kind() != "identifier" {
        return None;
    }
    Some(parsed.text_of(name))
}

/// Extracts the single top-level `const` declaration with a given name.
pub struct ConstantExtractor;

impl ConstantExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Apply the matching rule and the exactly-one cardinality policy.
    ///
    /// A statement qualifies iff it is a top-level `const` declaration whose
    /// first declarator binds exactly `name` (case-sensitive). Zero matches
    /// or more than one are both fatal.
    pub fn extract(
        &self,
        parsed: &ParsedFile,
        name: &str,
    ) -> Result<ExtractedDeclaration, ExtractError> {
        let matches: Vec<TopLevelConst<'_>> = top_level_consts(parsed)
            .into_iter()
            .filter(|c| first_declarator_name(c.decl, parsed) == Some(name))
            .collect();

        match matches.as_slice() {
            [] => Err(ExtractError::NotFound {
                name: name.to_string(),
                path: parsed.path().display().to_string(),
            }),
            [only] => {
                tracing::debug!(
                    name,
                    line = only.decl.start_position().row + 1,
                    exported = only.exported,
                    "matched declaration"
                );
                Ok(ExtractedDeclaration {
                    name: name.to_string(),
                    span: only.decl.byte_range(),
                    line: only.decl.start_position().row + 1,
                    exported: only.exported,
                })
            }
            many => Err(ExtractError::Ambiguous {
                name: name.to_string(),
                count: many.len(),
                path: parsed.path().display().to_string(),
            }),
        }
    }
}

impl Default for ConstantExtractor {
    fn default() -> Self {
        Self::new()
    }
}
