//! Vector error types.

use thiserror::Error;

/// Errors raised while building, encoding or decoding an embedding vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Invalid dimension {dimensions}: {reason}")]
    InvalidDimension {
        dimensions: usize,
        reason: &'static str,
    },

    #[error("Degenerate vector: zero norm after {attempts} attempts")]
    DegenerateVector { attempts: usize },

    #[error("Invalid vector encoding: {0}")]
    InvalidEncoding(String),
}

pub type VectorResult<T> = Result<T, VectorError>;
