//! Deterministic serialization and file output.
//!
//! Rendering is the inverse of loading: the in-memory document goes back
//! to disk with sorted keys, a caller-chosen indentation width, and
//! exactly one trailing newline, so reformatting the same data always
//! produces the same bytes.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::document::sort_keys;
use crate::error::{TidyError, TidyResult};

/// Serialize an already-ordered document to a string.
///
/// Uses `indent` spaces per nesting level and appends a single trailing
/// newline. An `indent` of zero still breaks lines, with no leading
/// whitespace.
pub fn render(value: &Value, indent: usize) -> TidyResult<String> {
    let indent_unit = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_unit.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut text = String::from_utf8(buffer)?;
    text.push('\n');
    Ok(text)
}

/// Write `value` to `path` with sorted keys and `indent`-space indentation.
///
/// Missing parent directories are created first; an existing file at
/// `path` is overwritten.
pub fn dump(value: &Value, path: &Path, indent: usize) -> TidyResult<()> {
    if let Some(parent) = path.parent() {
        // parent() yields "" for bare filenames, which is not creatable
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| TidyError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let text = render(&sort_keys(value), indent)?;
    fs::write(path, text).map_err(|source| TidyError::Io {
        path: path.to_path_buf(),
        source,
    })
}
