//! In-process document store.

use crate::error::{StoreError, StoreResult};
use crate::pipeline::{classify, count_results, Stage};
use crate::traits::{DocumentStore, SearchIndexManager};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use vecbench_core::Document;

/// Keeps every inserted document in a `Vec`.
///
/// Also records the size of each `insert_many` call so batching behavior can
/// be checked after the fact.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
    batch_sizes: Vec<usize>,
    indexes: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Sizes of every `insert_many` call, in call order.
    pub fn batch_sizes(&self) -> &[usize] {
        &self.batch_sizes
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    type Error = StoreError;

    fn insert_many(&mut self, documents: Vec<Document>) -> StoreResult<()> {
        self.batch_sizes.push(documents.len());
        self.documents.extend(documents);
        Ok(())
    }

    fn count_documents(&self) -> StoreResult<u64> {
        Ok(self.documents.len() as u64)
    }

    fn aggregate(&self, pipeline: &[Value]) -> StoreResult<Vec<Value>> {
        match classify(pipeline)? {
            Stage::ListSearchIndexes => self.list_search_indexes(),
            stage => Ok(count_results(&stage, self.documents.len() as u64)),
        }
    }
}

impl SearchIndexManager for MemoryStore {
    type Error = StoreError;

    fn create_search_index(&mut self, name: &str, definition: Value) -> StoreResult<String> {
        if self.indexes.contains_key(name) {
            return Err(StoreError::IndexAlreadyExists(name.to_string()));
        }
        self.indexes.insert(name.to_string(), definition);
        Ok(name.to_string())
    }

    fn list_search_indexes(&self) -> StoreResult<Vec<Value>> {
        Ok(self
            .indexes
            .iter()
            .map(|(name, definition)| json!({ "name": name, "latestDefinition": definition }))
            .collect())
    }

    fn drop_search_index(&mut self, name: &str) -> StoreResult<()> {
        self.indexes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::IndexNotFound(name.to_string()))
    }
}
