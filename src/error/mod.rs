//! Error types for manifest generation

use std::path::PathBuf;

/// Core error type for scan and manifest operations
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("JSON serialization error: {message}")]
    Serialize { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ManifestError {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn serialize(message: String) -> Self {
        Self::Serialize { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
            } => {
                format!("IO error at {}: {}", path.display(), message)
            }
            Self::Io {
                message,
                path: None,
            } => {
                format!("IO error: {}", message)
            }
            Self::Serialize { message } => {
                format!("Failed to serialize manifest: {}", message)
            }
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
        }
    }
}

/// Result type for scan and manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
