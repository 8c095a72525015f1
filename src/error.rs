//! Error types for gitprobe operations.
//!
//! Probe failures never surface as errors — every check converts what it
//! hits into a [`crate::record::CheckRecord`]. [`GitprobeError`] exists for
//! the shell-execution layer, where launching or waiting on a child process
//! can genuinely fail.

use thiserror::Error;

/// Core error type for gitprobe operations.
#[derive(Debug, Error)]
pub enum GitprobeError {
    /// The command binary could not be launched at all.
    #[error("Failed to launch '{command}': {source}")]
    CommandLaunch {
        command: String,
        source: std::io::Error,
    },

    /// The command ran past its deadline and was killed.
    #[error("Command '{command}' timed out after {seconds}s")]
    CommandTimedOut { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gitprobe operations.
pub type Result<T> = std::result::Result<T, GitprobeError>;
