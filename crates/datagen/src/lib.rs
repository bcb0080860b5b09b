//! Synthetic data generation for seeding a search index.
//!
//! Produces random documents and embedding vectors from an injected random
//! source, and drives batched inserts into any [`DocumentStore`].
//!
//! # Example
//! ```ignore
//! use vecbench_datagen::{DocumentGenerator, GeneratorConfig};
//! use vecbench_store::MemoryStore;
//! use std::num::NonZeroUsize;
//!
//! let mut generator = DocumentGenerator::from_config(GeneratorConfig::default())?;
//! let mut store = MemoryStore::new();
//! let cap = NonZeroUsize::new(10_000).unwrap();
//! let total = generator.generate_and_insert(25_000, &mut store, cap)?;
//! assert_eq!(total, 25_000);
//! ```
//!
//! [`DocumentStore`]: vecbench_store::DocumentStore

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod gaussian;
pub mod vector;

pub use batch::{batch_plan, InsertError};
pub use config::{GeneratorConfig, DATE_LOWER_MS, DATE_UPPER_MS, MAX_BATCH_SIZE};
pub use document::DocumentGenerator;
pub use error::{GenError, GenResult};
pub use gaussian::BoxMuller;
pub use vector::{generate_vector, MAX_NORMALIZE_ATTEMPTS};
