//! Session loading operations.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StoreError};
use crate::types::{CURRENT_FORMAT_VERSION, SessionFile};

/// Just enough of the file to check its version before a full parse.
#[derive(Deserialize)]
struct VersionProbe {
    format_version: u32,
}

/// Load a session file.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let bytes = fs::read(path).map_err(|e| StoreError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = parse_session_bytes(&bytes, path)?;
    tracing::info!("Loaded session from {}", path.display());
    Ok(file)
}

/// Parse session bytes and validate the format version.
pub fn parse_session_bytes(bytes: &[u8], path: &Path) -> Result<SessionFile> {
    let probe: VersionProbe =
        serde_json::from_slice(bytes).map_err(|source| StoreError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;

    if probe.format_version > CURRENT_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: probe.format_version,
            max_supported: CURRENT_FORMAT_VERSION,
            path: path.to_path_buf(),
        });
    }

    serde_json::from_slice(bytes).map_err(|source| StoreError::Deserialization {
        path: path.to_path_buf(),
        source,
    })
}
