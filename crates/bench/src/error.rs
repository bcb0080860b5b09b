//! Benchmark error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type BenchResult<T> = Result<T, BenchError>;
