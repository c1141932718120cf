//! Defines custom error types for the converter.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when building or reading an MSVG container fails.
pub enum ConvertError {
    #[error("Error reading {} folder: {source}", .path.display())]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {name}: {source}")]
    ReadPage {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed MSVG container: {0}")]
    MalformedContainer(String),
}

impl ConvertError {
    /// Whether the run must stop. Only per-page read failures are recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConvertError::ReadPage { .. })
    }
}
