//! Snippet assembly and re-parse validation.

use std::path::Path;

use crate::errors::SnippetError;
use crate::extractor::ExtractedDeclaration;
use crate::parsers::{ParsedFile, TypeScriptParser};

/// The standalone program evaluated in place of the whole file: the exact
/// source span of the matched declaration, then a bare reference to the
/// identifier so the last evaluated expression is the constant's value.
pub struct Snippet {
    pub text: String,
}

impl Snippet {
    /// Slice the declaration span out of the original source, append the
    /// trailing reference, and verify the result re-parses as a valid
    /// two-statement program.
    ///
    /// Extraction matching on a clean tree makes a failure here unlikely;
    /// the check guards against malformed slicing, not user input.
    pub fn build(
        parsed: &ParsedFile,
        decl: &ExtractedDeclaration,
    ) -> Result<Self, SnippetError> {
        let slice = &parsed.source()[decl.span.clone()];
        let text = format!("{slice}\n{}", decl.name);

        let reparsed = TypeScriptParser::new()
            .and_then(|mut p| p.parse(text.clone(), Path::new("<snippet>")))
            .map_err(|e| SnippetError::Invalid {
                message: e.to_string(),
            })?;

        let root = reparsed.root();
        if root.named_child_count() != 2 {
            return Err(SnippetError::Invalid {
                message: format!(
                    "expected 2 statements, found {}",
                    root.named_child_count()
                ),
            });
        }

        let trailer = root.named_child(1).expect("checked count above");
        let is_bare_reference = trailer.kind() == "expression_statement"
            && trailer
                .named_child(0)
                .map(|e| e.kind() == "identifier" && reparsed.text_of(e) == decl.name)
                .unwrap_or(false);
        if !is_bare_reference {
            return Err(SnippetError::Invalid {
                message: "trailing statement is not a bare reference".to_string(),
            });
        }

        Ok(Self { text })
    }
}
