use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for strip-gremlins
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("skip (not found): {}", path.display())]
    NotFound { path: PathBuf },

    #[error("skip (not a file): {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("skip (read error): {} - {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("write failed: {} - {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl CleanError {
    /// True when the path was left alone before any content was touched.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            CleanError::NotFound { .. } | CleanError::NotAFile { .. } | CleanError::Read { .. }
        )
    }
}

/// Result type alias for cleaner error handling
pub type Result<T> = std::result::Result<T, CleanError>;
