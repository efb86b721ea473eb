//! Scan configuration

use std::path::PathBuf;

use crate::error::{ManifestError, ManifestResult};

/// Parameters for a single manifest run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to walk (may not exist; the scan is then empty)
    pub root: PathBuf,
    /// Literal substring a directory path must contain (case-sensitive)
    pub path_substring: String,
    /// Literal suffix a file name must end with, e.g. ".gltf" (case-sensitive)
    pub file_extension: String,
    /// Destination for the JSON manifest
    pub output_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./models"),
            path_substring: "TERRAIN(TB)".to_string(),
            file_extension: ".gltf".to_string(),
            output_path: PathBuf::from("modelStrings.json"),
        }
    }
}

impl ScanConfig {
    /// Validate the configuration before a run
    pub fn validate(&self) -> ManifestResult<()> {
        if self.file_extension.is_empty() {
            return Err(ManifestError::configuration(
                "file extension must not be empty".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ManifestError::configuration(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
