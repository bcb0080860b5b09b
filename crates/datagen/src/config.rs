//! Generator configuration.

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use vecbench_core::{VectorKind, DEFAULT_DIMENSIONS};

/// Largest number of documents produced by a single `generate_batch` call.
pub const MAX_BATCH_SIZE: usize = 250_000;

/// 1970-01-01T00:00:00Z, inclusive lower bound for generated dates.
pub const DATE_LOWER_MS: i64 = 0;

/// 2025-01-01T00:00:00Z, exclusive upper bound for generated dates.
pub const DATE_UPPER_MS: i64 = 1_735_689_600_000;

/// Shape of the generated documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Dimensionality of each document's `vector` field.
    pub dimensions: usize,

    /// Encoding of each document's `vector` field.
    pub vector_kind: VectorKind,

    /// Per-call cap on `generate_batch`. At most [`MAX_BATCH_SIZE`].
    pub max_batch_size: usize,

    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(dimensions: usize, vector_kind: VectorKind) -> Self {
        Self {
            dimensions,
            vector_kind,
            ..Default::default()
        }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-call batch cap.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> GenResult<()> {
        self.vector_kind.check_dimensions(self.dimensions)?;
        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_SIZE {
            return Err(GenError::InvalidConfig(format!(
                "max_batch_size must be in 1..={}, got {}",
                MAX_BATCH_SIZE, self.max_batch_size
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            vector_kind: VectorKind::Unit,
            max_batch_size: MAX_BATCH_SIZE,
            seed: None,
        }
    }
}
