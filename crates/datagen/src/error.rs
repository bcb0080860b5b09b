//! Generator error types.

use thiserror::Error;
use vecbench_core::VectorError;

/// Errors raised while generating data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
}

pub type GenResult<T> = Result<T, GenError>;
