//! Input boundary: read a Label Studio export and validate its top-level
//! shape before anything reaches the core.

use crate::core::errors::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and validate an export file.
///
/// Checks, in order: `.json` extension (when required), readability, JSON
/// syntax, and that the top-level value is an array. Array elements are
/// returned as-is; their contents are validated leniently by the normalizer.
pub fn load_tasks(path: &Path, require_json_extension: bool) -> Result<Vec<Value>> {
    if require_json_extension && !has_json_extension(path) {
        return Err(Error::NotJsonFile {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let tasks = parse_tasks(&contents)?;
    debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Parse in-memory export content into its list of task values.
pub fn parse_tasks(contents: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Array(tasks) => Ok(tasks),
        other => Err(Error::NotAnArray {
            found: json_type_name(&other),
        }),
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
