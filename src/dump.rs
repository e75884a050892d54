// src/dump.rs
// =============================================================================
// Writes the fetched event feed to a file as JSON (the --dump-json mode).
//
// Handy for looking at what GitHub actually sent when a line renders oddly.
// Pretty vs compact output is an explicit option, not global state.
// =============================================================================

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::ActivityError;

/// File name used when --dump-json is given without a value.
pub const DEFAULT_DUMP_FILE: &str = "file.json";

/// Where and how to write the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    pub path: PathBuf,
    /// Indented output when true, a single line otherwise
    pub pretty: bool,
}

/// Serializes `records` as a JSON array and writes them to `options.path`.
///
/// An existing file is overwritten.
pub fn write_dump(records: &[Value], options: &DumpOptions) -> Result<(), ActivityError> {
    let mut json = if options.pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    json.push('\n');

    debug!(path = %options.path.display(), bytes = json.len(), "writing dump");

    fs::write(&options.path, json).map_err(|source| ActivityError::Io {
        path: options.path.display().to_string(),
        source,
    })
}
