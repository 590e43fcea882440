use thiserror::Error;

/// Result type for session-model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while decoding the primary session export
#[derive(Error, Debug)]
pub enum ModelError {
    /// Malformed CSV structure
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The export has no header row
    #[error("Missing header row")]
    MissingHeaders,
}

impl ModelError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}
