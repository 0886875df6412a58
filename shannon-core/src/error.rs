//! Error types for text processing and frequency-table persistence

use thiserror::Error;

/// Errors reported by the text pipeline and the n-gram analyzer
#[derive(Debug, Error)]
pub enum TextError {
    /// Input text cannot be analyzed (no words, no sentences, bad parameter)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A persisted frequency record could not be turned back into a table
    #[error("serialization format error: {0}")]
    SerializationFormat(String),

    /// A token would make its persisted key ambiguous (it contains or borders the delimiter)
    #[error("token {token:?} collides with the key delimiter \"||\"")]
    DelimiterCollision {
        /// The offending token
        token: String,
    },

    /// I/O error at the persistence boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("serialization format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextError {
    /// Whether this error means a persisted record was unreadable
    pub fn is_format_error(&self) -> bool {
        matches!(self, TextError::SerializationFormat(_) | TextError::Json(_))
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, TextError>;
