//! Random document generation.

use crate::config::{GeneratorConfig, DATE_LOWER_MS, DATE_UPPER_MS};
use crate::error::GenResult;
use crate::vector::generate_vector;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;
use vecbench_core::{Document, EmbeddingVector};

/// Generates documents of a fixed shape from an owned random source.
///
/// All randomness, including the `uuid` field, comes from `rng`, so a seeded
/// source reproduces the same documents.
#[derive(Debug)]
pub struct DocumentGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl DocumentGenerator<StdRng> {
    /// Build a generator seeded from `config.seed`, or from OS entropy when
    /// no seed is set.
    pub fn from_config(config: GeneratorConfig) -> GenResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> DocumentGenerator<R> {
    /// Build a generator around an explicit random source. `config.seed` is
    /// ignored.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> GenResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one vector with the configured kind and dimensionality.
    pub fn generate_vector(&mut self) -> GenResult<EmbeddingVector> {
        Ok(generate_vector(
            &mut self.rng,
            self.config.dimensions,
            self.config.vector_kind,
        )?)
    }

    /// Generate one document.
    pub fn generate_document(&mut self) -> GenResult<Document> {
        let vector = self.generate_vector()?;
        let rng = &mut self.rng;

        Ok(Document {
            string: random_string(rng, 2),
            token: random_string(rng, 8),
            number: 100.0 * rng.gen::<f64>(),
            date: random_date(rng, DATE_LOWER_MS, DATE_UPPER_MS),
            uuid: random_uuid(rng),
            vector,
            boolean: rng.gen::<bool>(),
            stored: rng.gen_range(0..1000),
        })
    }

    /// Generate up to `count` documents.
    ///
    /// Requests above `max_batch_size` are cut down to it and a warning is
    /// logged; callers wanting more call again.
    pub fn generate_batch(&mut self, count: usize) -> GenResult<Vec<Document>> {
        let max = self.config.max_batch_size;
        let count = if count > max {
            tracing::warn!("Can't generate more than {} docs per request, got {}", max, count);
            max
        } else {
            count
        };

        let mut documents = Vec::with_capacity(count);
        for _ in 0..count {
            documents.push(self.generate_document()?);
        }
        Ok(documents)
    }
}

/// Random string over `[A-Za-z0-9]`.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Uniform timestamp in `[lower_ms, upper_ms)`, millisecond precision.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, lower_ms: i64, upper_ms: i64) -> DateTime<Utc> {
    let ms = rng.gen_range(lower_ms..upper_ms);
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

/// Random version 4 UUID drawn from `rng`.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
