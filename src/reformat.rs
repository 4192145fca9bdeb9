//! The reformatter pipeline: load, sort, dump.
//!
//! The default paths mirror the data layout this tool was built around;
//! both the CLI and library callers can override them freely.

use std::path::Path;

use crate::document::load;
use crate::error::TidyResult;
use crate::render::dump;

/// Conventional location of the raw data file.
pub const DEFAULT_INPUT: &str = "other_data/traffic_cameras.json";

/// Conventional location for the formatted copy.
pub const DEFAULT_OUTPUT: &str = "other_data/traffic_cameras_v2.json";

/// Default indentation width in spaces.
pub const DEFAULT_INDENT: usize = 2;

/// Load `input`, then write its sorted, indented form to `output`.
///
/// The destination is only touched once the input has parsed: a missing
/// or malformed input fails the run and leaves `output` as it was.
pub fn run(input: &Path, output: &Path, indent: usize) -> TidyResult<()> {
    let document = load(input)?;
    dump(&document, output, indent)
}
