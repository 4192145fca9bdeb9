//! json-tidy - deterministic JSON reformatter.
//!
//! Reads a JSON data file and writes it back out with lexicographically
//! sorted object keys, a configurable indentation width, and a single
//! trailing newline. Minified or inconsistently formatted inputs come out
//! normalized and diff-friendly; the data itself is untouched.
//!
//! # Architecture
//!
//! The implementation is a thin pipeline over a parse/serialize round-trip:
//!
//! - [`document`] - loading a file into a [`serde_json::Value`] and key ordering
//! - [`render`] - deterministic serialization and file output
//! - [`reformat`] - the load -> sort -> dump composition used by the CLI
//! - [`error`] - error types shared across the crate
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let input = Path::new("other_data/traffic_cameras.json");
//! let output = Path::new("other_data/traffic_cameras_v2.json");
//! json_tidy::run(input, output, 2)?;
//! # Ok::<(), json_tidy::TidyError>(())
//! ```

// Library code must not unwrap/expect/panic; every failure propagates as
// a TidyError up to the CLI.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod reformat;
pub mod render;

// Re-export commonly used items
pub use document::{load, sort_keys};
pub use error::{TidyError, TidyResult};
pub use reformat::{run, DEFAULT_INDENT, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use render::{dump, render};
