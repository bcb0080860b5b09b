//! Core document and embedding vector types for vecbench.
//!
//! Everything here is plain data plus the small amount of vector math the
//! generator and the tests need. Generation lives in `vecbench-datagen`.

pub mod distance;
pub mod error;
pub mod similarity;
pub mod types;
pub mod vector;

pub use distance::{l2_norm, normalize};
pub use error::{VectorError, VectorResult};
pub use similarity::Similarity;
pub use types::Document;
pub use vector::{pack_bits, unpack_bits, EmbeddingVector, VectorKind, DEFAULT_DIMENSIONS};
