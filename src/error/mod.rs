//! Error handling for the screening pipeline.

/// Specialized error type for screening operations
///
/// Input errors (`InvalidInput`, `OutOfRange`, `MissingAnswer`) abort the
/// current submission before any prediction is attempted. Classifier and
/// schema errors are fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// A categorical answer outside its enumerated domain
    #[error("invalid value '{value}' for {field}")]
    InvalidInput {
        /// Question the answer belongs to
        field: &'static str,
        /// The offending raw answer
        value: String,
    },

    /// A numeric answer outside its declared bounds
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Question the answer belongs to
        field: &'static str,
        /// The offending value
        value: i64,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// A required question with no answer in the submission
    #[error("missing answer for {field}")]
    MissingAnswer {
        /// The unanswered question
        field: &'static str,
    },

    /// The model artifact cannot be loaded or invoked
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// The loaded model does not match the canonical feature schema
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Error reading from or writing to the answer surface
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
