//! modelscan
//!
//! A Rust CLI tool that walks a model directory tree, collects files matching
//! a directory-substring and file-extension filter, and writes the resulting
//! paths to an indented JSON manifest.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{ManifestError, ManifestResult};
pub use manifest::{to_json, write_manifest};
pub use scanner::scan;

/// Run a full scan-and-write pass with the given configuration, returning
/// the collected paths.
pub fn generate_manifest(config: &ScanConfig) -> ManifestResult<Vec<String>> {
    config.validate()?;

    let files = scan(
        &config.root,
        &config.path_substring,
        &config.file_extension,
    );
    write_manifest(&files, &config.output_path)?;

    Ok(files)
}
