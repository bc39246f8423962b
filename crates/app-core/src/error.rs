//! Error Types

use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

/// Shell error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Navigation target is not an absolute client path
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    /// Two route entries claim the same pattern
    #[error("Duplicate route pattern: {0}")]
    DuplicateRoute(String),

    /// Moved past either end of the navigation history
    #[error("No history entry at offset {offset} (position {position} of {len})")]
    HistoryBoundary {
        offset: isize,
        position: usize,
        len: usize,
    },
}
