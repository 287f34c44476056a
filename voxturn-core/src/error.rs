//! Error types for voxturn-core organized by processing stage.

use thiserror::Error;

/// Analysis error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload decoding or selection error
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// IO error while reading a payload file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Recognizer and diarizer response errors.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Batch response without any item
    #[error("batch response contains no items")]
    EmptyBatch,

    /// Requested batch item does not exist
    #[error("no item with custom_id {custom_id:?} in batch response")]
    ItemNotFound { custom_id: String },

    /// Transcript was requested without word timestamps
    #[error("transcript has no word timestamps (request it with return_timestamps enabled)")]
    MissingTimestamps,

    /// Malformed JSON body
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for voxturn-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// serde_json::Error → PayloadError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Payload(PayloadError::Json(e))
    }
}
