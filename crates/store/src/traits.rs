//! Collaborator interfaces.

use serde_json::Value;
use vecbench_core::Document;

/// A collection that accepts generated documents and answers queries.
///
/// Every call blocks until the store has answered. Implementations own their
/// connection and clean it up on drop.
pub trait DocumentStore {
    type Error: std::error::Error;

    /// Insert one batch of documents.
    fn insert_many(&mut self, documents: Vec<Document>) -> Result<(), Self::Error>;

    /// Number of documents currently in the collection.
    fn count_documents(&self) -> Result<u64, Self::Error>;

    /// Run an aggregation pipeline and return the result documents.
    fn aggregate(&self, pipeline: &[Value]) -> Result<Vec<Value>, Self::Error>;
}

/// Search index management on a collection.
pub trait SearchIndexManager {
    type Error: std::error::Error;

    /// Create a search index and return its name.
    fn create_search_index(&mut self, name: &str, definition: Value)
        -> Result<String, Self::Error>;

    /// All search indexes on the collection, as `{name, definition}` documents.
    fn list_search_indexes(&self) -> Result<Vec<Value>, Self::Error>;

    fn drop_search_index(&mut self, name: &str) -> Result<(), Self::Error>;
}
