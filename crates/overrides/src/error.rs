use thiserror::Error;

/// Result type for override-store operations
pub type Result<T> = std::result::Result<T, OverrideError>;

/// Errors that can occur in the override persistence layer.
///
/// These never cross the store's public save/delete surface; they are
/// logged and reported as boolean failures so a broken local cache
/// cannot block the CSV-derived views.
#[derive(Error, Debug)]
pub enum OverrideError {
    /// Storage backend failure
    #[error("Storage error: {0}")]
    StorageError(String),

    /// IO error while reading or writing the persisted file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Persisted payload is not valid JSON
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OverrideError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }
}
