//! JSON manifest serialization

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ManifestError, ManifestResult};

/// Render `items` as a JSON array with 4-space indentation.
/// An empty slice renders as `[]`.
pub fn to_json(items: &[String]) -> ManifestResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    items
        .serialize(&mut serializer)
        .map_err(|err| ManifestError::serialize(err.to_string()))?;

    String::from_utf8(buf).map_err(|err| ManifestError::serialize(err.to_string()))
}

/// Write `items` to `output_path` as an indented JSON array, UTF-8 encoded,
/// overwriting any existing file. The parent directory must already exist;
/// an unwritable destination is a fatal error for the run.
pub fn write_manifest(items: &[String], output_path: &Path) -> ManifestResult<()> {
    let json = to_json(items)?;

    fs::write(output_path, json)
        .map_err(|err| ManifestError::io(err.to_string(), Some(output_path.to_path_buf())))
}
