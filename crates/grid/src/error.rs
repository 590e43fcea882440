use thiserror::Error;

/// Result type for schedule-grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while parsing the scheduling grid
#[derive(Error, Debug)]
pub enum GridError {
    /// The matrix is too short to carry the two header rows
    #[error("Malformed grid: expected at least 2 rows, got {rows}")]
    MalformedGrid { rows: usize },

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
