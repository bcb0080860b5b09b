//! Store collaborators for vecbench.
//!
//! The generator and the benchmarks talk to a search engine only through the
//! [`DocumentStore`] and [`SearchIndexManager`] traits defined here. Two small
//! implementations ship with the crate: [`MemoryStore`] for tests and
//! [`JsonLinesStore`] for dumping generated data to disk.

pub mod error;
pub mod jsonl;
pub mod memory;
pub mod pipeline;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use jsonl::JsonLinesStore;
pub use memory::MemoryStore;
pub use pipeline::{
    count_pipeline, count_total, default_index_definition, list_indexes_pipeline, DEFAULT_INDEX_NAME,
};
pub use traits::{DocumentStore, SearchIndexManager};
