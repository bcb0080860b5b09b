//! Store error types.

use thiserror::Error;

/// Errors from the bundled store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty pipeline")]
    EmptyPipeline,

    #[error("Unsupported pipeline stage: {0}")]
    UnsupportedStage(String),

    #[error("Search index already exists: {0}")]
    IndexAlreadyExists(String),

    #[error("Search index not found: {0}")]
    IndexNotFound(String),

    #[error("Malformed aggregate result: {0}")]
    MalformedResult(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
