//! Error types for pandoc-tablespan.

use thiserror::Error;

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the document boundary. The table passes themselves never
/// fail; unrecognized markup is passed through.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid JSON, or output could not be serialized.
    #[error("Invalid pandoc JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that is not a pandoc document.
    #[error("Unsupported pandoc document: {0}")]
    UnsupportedDocument(String),
}
