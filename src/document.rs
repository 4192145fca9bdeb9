//! Document loading and key ordering.
//!
//! A document is an arbitrary [`serde_json::Value`] tree read fully into
//! memory. Key order in the input carries no meaning, so [`sort_keys`]
//! rebuilds the tree with every object's keys in lexicographic order,
//! making the subsequent serialization deterministic.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{TidyError, TidyResult};

/// Parse the file at `path` as UTF-8 encoded JSON.
///
/// A missing file maps to [`TidyError::NotFound`]; anything that is not
/// syntactically valid JSON (including invalid UTF-8) maps to
/// [`TidyError::Parse`]; any other read failure maps to [`TidyError::Io`].
pub fn load(path: &Path) -> TidyResult<Value> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TidyError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TidyError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| TidyError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rebuild `value` with object keys in lexicographic order at every
/// nesting depth.
///
/// Arrays keep their element order; scalars pass through unchanged.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut sorted = Map::new();
            for key in keys {
                if let Some(v) = map.get(key) {
                    sorted.insert(key.clone(), sort_keys(v));
                }
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}
