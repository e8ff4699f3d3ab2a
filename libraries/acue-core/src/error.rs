/// Core error types for Acue Accounts
use thiserror::Error;

/// Result type alias using `AcueError`
pub type Result<T> = std::result::Result<T, AcueError>;

/// Core error type for Acue Accounts
#[derive(Error, Debug)]
pub enum AcueError {
    /// Record store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AcueError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
