//! Benchmark configuration.

use crate::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};

/// Settings for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Measured trials per runnable, after one warm-up execution.
    /// A single trial leaves the standard deviation undefined (NaN).
    pub trials: usize,
}

impl BenchConfig {
    pub fn new(trials: usize) -> Self {
        Self { trials }
    }

    /// Validate configuration.
    pub fn validate(&self) -> BenchResult<()> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig("trials must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { trials: 1 }
    }
}
