//! Core logic behind the command-line entry points:
//! - `nested-get`   — look up a dotted path in a JSON document
//! - `nested-merge` — structurally merge JSON documents

use thiserror::Error;

use crate::convert::ConvertError;
use crate::merge::merge;
use crate::ops::get_path;
use crate::options::DEFAULT_NESTED_OPTIONS;
use crate::path::Path;
use crate::value::Value;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Convert(#[from] ConvertError),
    #[error("NOT_FOUND")]
    NotFound,
}

/// Look up a dotted path in a JSON document.
///
/// Returns the value pretty-printed, or [`CliError::NotFound`] when the
/// path does not resolve.
///
/// # Example
///
/// ```
/// use nested::cli::lookup_path;
///
/// let out = lookup_path(r#"{"a": {"b": 42}}"#, "a.b").unwrap();
/// assert_eq!(out, "42");
/// assert!(lookup_path("{}", "a.b").is_err());
/// ```
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc: serde_json::Value = serde_json::from_str(doc_json)?;
    let root = Value::from(doc);
    let found = get_path(&root, &Path::from(path), None, &DEFAULT_NESTED_OPTIONS)
        .ok_or(CliError::NotFound)?;
    Ok(serde_json::to_string_pretty(&found.to_json()?)?)
}

/// Merge JSON documents left to right, returning the pretty-printed result.
///
/// # Example
///
/// ```
/// use nested::cli::merge_docs;
///
/// let out = merge_docs(&[r#"{"a": {"x": 1}}"#.into(), r#"{"a": {"y": 2}}"#.into()]).unwrap();
/// let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(parsed, serde_json::json!({"a": {"x": 1, "y": 2}}));
/// ```
pub fn merge_docs(docs: &[String]) -> Result<String, CliError> {
    let mut donors = Vec::with_capacity(docs.len());
    for doc in docs {
        let parsed: serde_json::Value = serde_json::from_str(doc)?;
        donors.push(Value::from(parsed));
    }
    let merged = merge(None, &donors);
    Ok(serde_json::to_string_pretty(&merged.to_json()?)?)
}
