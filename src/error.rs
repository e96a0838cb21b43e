//! Error types for knapchart
//!
//! Load failures are fatal to a run; a missing (algorithm, capacity) group
//! is only a warning and never surfaces here.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Knapchart error types
#[derive(Error, Debug)]
pub enum Error {
    /// Source table could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source bytes are not valid GBK
    #[error("encoding error: {0}\nThe benchmark table must be GBK-encoded")]
    Encoding(String),

    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks required columns
    #[error("missing required columns: {missing:?}")]
    MissingColumns {
        /// Canonical names of the absent columns
        missing: Vec<String>,
    },

    /// Chart could not be drawn or persisted
    #[error("render error: {0}")]
    Render(String),
}
