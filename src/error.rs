//! Error types for the gpuname library

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for gpuname operations
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The profiler command could not be started
    #[error("Failed to run profiler command: {0}")]
    Spawn(io::Error),

    /// Captured output is not valid UTF-8
    #[error("Failed to decode command output: {0}")]
    Decode(#[from] FromUtf8Error),

    /// Output does not start with the expected section header
    #[error("Unexpected output format, first line: {0:?}")]
    UnexpectedFormat(String),

    /// Reading a configuration or report file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolveError {
    /// Whether this error came from the command itself rather than its output
    pub fn is_spawn(&self) -> bool {
        matches!(self, ResolveError::Spawn(_))
    }
}

/// Result type for gpuname operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
