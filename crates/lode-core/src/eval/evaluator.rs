//! Tree-walking interpreter for the restricted literal grammar.

use rustc_hash::{FxHashMap, FxHashSet};
use tree_sitter::Node;

use crate::errors::EvalError;
use crate::extractor::{top_level_consts, ExtractedDeclaration};
use crate::parsers::ParsedFile;

use super::literals::{format_number_key, parse_number, unescape_string};
use super::types::LiteralValue;

/// Evaluates initializer expressions against an environment of the file's
/// top-level `const` declarators.
///
/// Resolution is lazy and memoized; an in-progress set turns reference
/// cycles into errors instead of unbounded recursion.
pub struct Evaluator<'t> {
    parsed: &'t ParsedFile,
    env: FxHashMap<&'t str, Node<'t>>,
    resolved: FxHashMap<String, LiteralValue>,
    in_progress: FxHashSet<String>,
}

impl<'t> Evaluator<'t> {
    /// Build the environment from every top-level `const` declarator in the
    /// file, export-wrapped declarations included. Each entry maps a bound
    /// identifier to its initializer node.
    pub fn new(parsed: &'t ParsedFile) -> Self {
        let mut env: FxHashMap<&'t str, Node<'t>> = FxHashMap::default();
        for tlc in top_level_consts(parsed) {
            let mut cursor = tlc.decl.walk();
            for declarator in tlc.decl.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let Some(name) = declarator.child_by_field_name("name") else {
                    continue;
                };
                if name.kind() != "identifier" {
                    continue;
                }
                let Some(value) = declarator.child_by_field_name("value") else {
                    continue;
                };
                env.entry(parsed.text_of(name)).or_insert(value);
            }
        }
        Self {
            parsed,
            env,
            resolved: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        }
    }

    /// Evaluate the matched declaration's constant by name.
    pub fn eval_declaration(
        &mut self,
        decl: &ExtractedDeclaration,
    ) -> Result<LiteralValue, EvalError> {
        self.resolve(&decl.name)
    }

    /// Resolve an identifier through the environment.
    pub fn resolve(&mut self, name: &str) -> Result<LiteralValue, EvalError> {
        if let Some(value) = self.resolved.get(name) {
            return Ok(value.clone());
        }
        let Some(&node) = self.env.get(name) else {
            return Err(EvalError::Unresolved {
                name: name.to_string(),
            });
        };
        if !self.in_progress.insert(name.to_string()) {
            return Err(EvalError::Circular {
                name: name.to_string(),
            });
        }
        let result = self.eval_expr(node);
        self.in_progress.remove(name);
        let value = result?;
        self.resolved.insert(name.to_string(), value.clone());
        Ok(value)
    }

    fn eval_expr(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        match node.kind() {
            "null" => Ok(LiteralValue::Null),
            "true" => Ok(LiteralValue::Bool(true)),
            "false" => Ok(LiteralValue::Bool(false)),
            "number" => {
                let text = self.parsed.text_of(node);
                parse_number(text, line_of(node)).map(LiteralValue::Number)
            }
            "string" => {
                let raw = self.parsed.text_of(node);
                unescape_string(raw, line_of(node)).map(LiteralValue::String)
            }
            "template_string" => self.eval_template(node),
            "identifier" => self.eval_identifier(node),
            "array" => self.eval_array(node),
            "object" => self.eval_object(node),
            "unary_expression" => self.eval_unary(node),
            // Type-level wrappers evaluate to their inner expression.
            "parenthesized_expression"
            | "as_expression"
            | "satisfies_expression"
            | "non_null_expression" => self.eval_inner(node),
            other => Err(EvalError::Unsupported {
                kind: other.to_string(),
                line: line_of(node),
            }),
        }
    }

    fn eval_identifier(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let name = self.parsed.text_of(node);
        if self.env.contains_key(name) {
            return self.resolve(name);
        }
        // Numeric globals; serialization rejects the non-finite ones.
        match name {
            "NaN" => Ok(LiteralValue::Number(f64::NAN)),
            "Infinity" => Ok(LiteralValue::Number(f64::INFINITY)),
            _ => Err(EvalError::Unresolved {
                name: name.to_string(),
            }),
        }
    }

    fn eval_array(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            match child.kind() {
                "comment" => {}
                "spread_element" => {
                    return Err(EvalError::Unsupported {
                        kind: "spread_element".to_string(),
                        line: line_of(child),
                    })
                }
                _ => items.push(self.eval_expr(child)?),
            }
        }
        Ok(LiteralValue::Array(items))
    }

    fn eval_object(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        let mut entries: Vec<(String, LiteralValue)> = Vec::with_capacity(children.len());

        for child in children {
            match child.kind() {
                "comment" => {}
                "pair" => {
                    let key_node =
                        child
                            .child_by_field_name("key")
                            .ok_or_else(|| EvalError::Malformed {
                                message: "pair without key".to_string(),
                                line: line_of(child),
                            })?;
                    let value_node =
                        child
                            .child_by_field_name("value")
                            .ok_or_else(|| EvalError::Malformed {
                                message: "pair without value".to_string(),
                                line: line_of(child),
                            })?;
                    let key = self.object_key(key_node)?;
                    let value = self.eval_expr(value_node)?;
                    insert_entry(&mut entries, key, value);
                }
                "shorthand_property_identifier" => {
                    let name = self.parsed.text_of(child);
                    let value = self.resolve(name)?;
                    insert_entry(&mut entries, name.to_string(), value);
                }
                other => {
                    return Err(EvalError::Unsupported {
                        kind: other.to_string(),
                        line: line_of(child),
                    })
                }
            }
        }

        Ok(LiteralValue::Object(entries))
    }

    fn object_key(&mut self, node: Node<'t>) -> Result<String, EvalError> {
        match node.kind() {
            "property_identifier" => Ok(self.parsed.text_of(node).to_string()),
            "string" => unescape_string(self.parsed.text_of(node), line_of(node)),
            "number" => {
                let n = parse_number(self.parsed.text_of(node), line_of(node))?;
                Ok(format_number_key(n))
            }
            other => Err(EvalError::Unsupported {
                kind: other.to_string(),
                line: line_of(node),
            }),
        }
    }

    fn eval_unary(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind().to_string())
            .unwrap_or_default();
        let argument = node
            .child_by_field_name("argument")
            .ok_or_else(|| EvalError::Malformed {
                message: "unary expression without argument".to_string(),
                line: line_of(node),
            })?;

        let value = self.eval_expr(argument)?;
        match (operator.as_str(), value) {
            ("-", LiteralValue::Number(n)) => Ok(LiteralValue::Number(-n)),
            ("+", LiteralValue::Number(n)) => Ok(LiteralValue::Number(n)),
            _ => Err(EvalError::Unsupported {
                kind: format!("unary `{operator}`"),
                line: line_of(node),
            }),
        }
    }

    /// Template strings qualify only when they carry no substitutions.
    fn eval_template(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let mut cursor = node.walk();
        let has_substitution = node
            .named_children(&mut cursor)
            .any(|c| c.kind() == "template_substitution");
        if has_substitution {
            return Err(EvalError::Unsupported {
                kind: "template_substitution".to_string(),
                line: line_of(node),
            });
        }
        let raw = self.parsed.text_of(node);
        unescape_string(raw, line_of(node)).map(LiteralValue::String)
    }

    fn eval_inner(&mut self, node: Node<'t>) -> Result<LiteralValue, EvalError> {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|c| c.kind() != "comment");
        match inner {
            Some(inner) => self.eval_expr(inner),
            None => Err(EvalError::Malformed {
                message: format!("empty {}", node.kind()),
                line: line_of(node),
            }),
        }
    }
}

/// Duplicate keys keep their first position and take the last value,
/// matching object literal semantics.
fn insert_entry(entries: &mut Vec<(String, LiteralValue)>, key: String, value: LiteralValue) {
    if let Some(existing) = entries.iter_mut().find(|(k, _)| *k == key) {
        existing.1 = value;
    } else {
        entries.push((key, value));
    }
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}
