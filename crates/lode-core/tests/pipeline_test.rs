//! End-to-end extraction tests over real files on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use lode_core::{
    extract_value, EvalError, ExtractError, JsonError, LodeErrorCode, ParseError, PipelineError,
    SourceError,
};

const NAME: &str = "LOG_INTEGRATIONS";

fn fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("integrations.ts");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn run(content: &str) -> Result<String, PipelineError> {
    let (_dir, path) = fixture(content);
    extract_value(&path, NAME)
}

#[test]
fn extracts_the_documented_example() {
    let out = run(r#"const LOG_INTEGRATIONS = {"a": 1, "b": [1,2,3]};"#).unwrap();
    assert_eq!(out, r#"{"a":1,"b":[1,2,3]}"#);
}

#[test]
fn object_keys_keep_source_order() {
    let out = run("const LOG_INTEGRATIONS = { nginx: 1, apache: 2, consul: 3 };").unwrap();
    assert_eq!(out, r#"{"nginx":1,"apache":2,"consul":3}"#);
}

#[test]
fn surrounding_declarations_are_ignored() {
    let source = r#"
import { registerPipeline } from "./registry";

const DEFAULT_PIPELINE = "logs";

export const LOG_INTEGRATIONS = {
  nginx: { pipeline: DEFAULT_PIPELINE, sources: ["nginx.access", "nginx.error"] },
  postgres: { pipeline: DEFAULT_PIPELINE, sources: ["postgresql.log"] },
};

export function unusedHelper(): number {
  return registerPipeline(LOG_INTEGRATIONS);
}
"#;
    let out = run(source).unwrap();
    assert_eq!(
        out,
        r#"{"nginx":{"pipeline":"logs","sources":["nginx.access","nginx.error"]},"postgres":{"pipeline":"logs","sources":["postgresql.log"]}}"#
    );
}

#[test]
fn type_annotations_are_stripped() {
    let out =
        run("const LOG_INTEGRATIONS: Record<string, number[]> = { a: [1, 2] };").unwrap();
    assert_eq!(out, r#"{"a":[1,2]}"#);
}

#[test]
fn zero_matches_fail_loudly() {
    let err = run("const SOMETHING_ELSE = 1;").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::NotFound { .. })
    ));
    assert_eq!(err.error_code(), "CARDINALITY_ERROR");
}

#[test]
fn duplicate_matches_fail_loudly() {
    let err = run("const LOG_INTEGRATIONS = 1;\nconst LOG_INTEGRATIONS = 2;").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::Ambiguous { count: 2, .. })
    ));
}

#[test]
fn mutable_binding_does_not_match() {
    let err = run("let LOG_INTEGRATIONS = { a: 1 };").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::NotFound { .. })
    ));
}

#[test]
fn missing_file_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let err = extract_value(&dir.path().join("absent.ts"), NAME).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Source(SourceError::NotFound { .. })
    ));
    assert_eq!(err.error_code(), "SOURCE_ERROR");
}

#[test]
fn invalid_syntax_is_a_parse_error() {
    let err = run("const LOG_INTEGRATIONS = {;").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Parse(ParseError::Syntax { .. })
    ));
}

#[test]
fn external_reference_fails_instead_of_yielding_null() {
    let source = r#"
import { buildList } from "./helpers";
const LOG_INTEGRATIONS = buildList;
"#;
    let err = run(source).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Unresolved { .. })
    ));
}

#[test]
fn computed_initializer_is_rejected() {
    let err = run("const LOG_INTEGRATIONS = Object.freeze({ a: 1 });").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Unsupported { .. })
    ));
    assert_eq!(err.error_code(), "EVAL_ERROR");
}

#[test]
fn literal_round_trip() {
    assert_eq!(run("const LOG_INTEGRATIONS = null;").unwrap(), "null");
    assert_eq!(run("const LOG_INTEGRATIONS = true;").unwrap(), "true");
    assert_eq!(run("const LOG_INTEGRATIONS = -3;").unwrap(), "-3");
    assert_eq!(run("const LOG_INTEGRATIONS = 2.5;").unwrap(), "2.5");
    assert_eq!(
        run(r#"const LOG_INTEGRATIONS = "quoted \"name\"";"#).unwrap(),
        r#""quoted \"name\"""#
    );
    assert_eq!(run("const LOG_INTEGRATIONS = [];").unwrap(), "[]");
    assert_eq!(run("const LOG_INTEGRATIONS = {};").unwrap(), "{}");
}

#[test]
fn integral_numbers_render_without_fraction() {
    let out = run("const LOG_INTEGRATIONS = { count: 10, ratio: 0.5 };").unwrap();
    assert_eq!(out, r#"{"count":10,"ratio":0.5}"#);
}

#[test]
fn non_finite_value_is_a_serialization_error() {
    let err = run("const LOG_INTEGRATIONS = { max: Infinity };").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Json(JsonError::NonFinite { .. })
    ));
    assert_eq!(err.error_code(), "JSON_ERROR");
}

#[test]
fn sibling_constants_resolve_through_the_file() {
    let source = r#"
const RETENTION_DAYS = 15;
const LOG_INTEGRATIONS = { retention: RETENTION_DAYS };
"#;
    let out = run(source).unwrap();
    assert_eq!(out, r#"{"retention":15}"#);
}
