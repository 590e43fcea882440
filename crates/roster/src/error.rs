use thiserror::Error;

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors that can occur while decoding the TA roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Malformed CSV structure
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl RosterError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}
