//! Error types for the reformatter.
//!
//! One enum covers everything the tool can hit: a missing input file,
//! malformed JSON, and filesystem failures on either side of the pipeline.
//! Nothing is recovered internally; every error propagates to the CLI,
//! which reports it on stderr and exits non-zero.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced while loading, rendering, or writing a document.
#[derive(Debug, Error)]
pub enum TidyError {
    /// The input path does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The input file is not syntactically valid JSON.
    #[error("invalid JSON in {}: {}", path.display(), source)]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser diagnostic with line and column information.
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },

    /// Serializing the document failed.
    #[error("JSON serialization failed: {0}")]
    Render(#[from] serde_json::Error),

    /// The serializer produced bytes that are not valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result alias used throughout the crate.
pub type TidyResult<T> = Result<T, TidyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_found_display_names_path() {
        let err = TidyError::NotFound {
            path: Path::new("missing/input.json").to_path_buf(),
        };
        assert_eq!(
            err.to_string(),
            "input file not found: missing/input.json"
        );
    }

    #[test]
    fn test_parse_display_includes_diagnostic() {
        let source = match serde_json::from_str::<serde_json::Value>("not json") {
            Err(e) => e,
            Ok(_) => panic!("expected a parse error"),
        };
        let err = TidyError::Parse {
            path: Path::new("bad.json").to_path_buf(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("invalid JSON in bad.json:"), "{message}");
    }

    #[test]
    fn test_io_display_names_path() {
        let err = TidyError::Io {
            path: Path::new("out/dir").to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/dir"));
    }
}
