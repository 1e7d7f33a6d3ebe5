//! Storage error types.
//!
//! All storage operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use thiserror::Error;
use vocab_model::ModelError;
use vocab_review::ReviewError;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word list CSV could not be read.
    #[error("Invalid word list {path}: {reason}")]
    InvalidWordList { path: PathBuf, reason: String },

    /// Unsupported session file version.
    #[error("Session file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// Serialization error.
    #[error("Failed to serialize session data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization error.
    #[error("Failed to deserialize session file: {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored words do not form a valid catalog.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Stored state could not be turned into a session.
    #[error(transparent)]
    Review(#[from] ReviewError),
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidWordList { path, reason } => {
                format!(
                    "The file at {} is not a valid word list: {}",
                    path.display(),
                    reason
                )
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This session file was created with a newer version \
                    (file version {}, your version supports up to {}). \
                    Please update the application.",
                    found, max_supported
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the session.".to_string()
            }
            Self::Deserialization { path, .. } => {
                format!(
                    "The session file '{}' could not be read. The file may be corrupted.",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown")
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Model(error) => error.to_string(),
            Self::Review(error) => error.user_message(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidWordList { .. } => Some(
                "Word lists are CSV files with a 'word,occurrences' header, most frequent first."
                    .into(),
            ),
            Self::UnsupportedVersion { .. } => Some("Install the latest release.".into()),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => Some("Try opening a backup if you have one.".into()),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
            Self::Model(_) => None,
            Self::Review(error) => error.suggestion(),
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
