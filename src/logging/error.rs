//! Error definitions for the write path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by logging calls.
#[derive(Debug, Error)]
pub enum LogError {
    /// Numeric level is not in the level table. An ERROR notice was written.
    #[error("invalid log level {0}")]
    InvalidLevel(i64),

    /// Dispatch name does not resolve to a level. An ERROR notice was written.
    #[error("method {0} does not exist")]
    UnknownLevelName(String),

    /// Destination file could not be opened or appended.
    #[error("failed to append to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A process-wide logger was installed twice.
    #[error("a process-wide logger is already installed")]
    AlreadyInstalled,
}

/// Result type for logging calls.
pub type LogResult<T> = Result<T, LogError>;
