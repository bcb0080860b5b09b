//! Canned pipelines and index definitions used against a dev cluster.

use crate::error::{StoreError, StoreResult};
use serde_json::{json, Value};
use vecbench_core::Similarity;

/// Name the default search index is created under.
pub const DEFAULT_INDEX_NAME: &str = "default";

/// Count every document visible to the search index.
///
/// Unlike `countDocuments`, this goes through the search engine, so it only
/// counts what has actually been indexed.
pub fn count_pipeline() -> Vec<Value> {
    vec![json!({
        "$searchMeta": {
            "count": { "type": "total" },
            "queryString": { "defaultPath": "_id", "query": "*:*" }
        }
    })]
}

/// List the search indexes defined on a collection.
pub fn list_indexes_pipeline() -> Vec<Value> {
    vec![json!({ "$listSearchIndexes": {} })]
}

/// Index definition matching the generated document shape.
///
/// Dynamic mappings plus explicit types for `token`, `date`, `number` and a
/// euclidean `knnVector` on `vector`. `stored` is kept in stored source.
pub fn default_index_definition(dimensions: usize) -> Value {
    json!({
        "mappings": {
            "dynamic": true,
            "fields": {
                "token": { "type": "token" },
                "date": { "type": "date" },
                "number": { "type": "number" },
                "vector": {
                    "type": "knnVector",
                    "similarity": Similarity::Euclidean.as_str(),
                    "dimensions": dimensions
                }
            }
        },
        "storedSource": { "include": ["stored"] }
    })
}

/// Read the total out of a `$searchMeta` count result.
///
/// A result without a non-negative integer at `count.total` is an error,
/// never a count of zero.
pub fn count_total(results: &[Value]) -> StoreResult<u64> {
    results
        .first()
        .and_then(|doc| doc.get("count"))
        .and_then(|count| count.get("total"))
        .and_then(Value::as_u64)
        .ok_or_else(|| StoreError::MalformedResult(Value::from(results.to_vec()).to_string()))
}

/// The pipeline shapes the bundled stores know how to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Stage {
    /// `$searchMeta` with a total count.
    SearchMetaCount,
    /// `{"$count": "<field>"}`.
    Count(String),
    ListSearchIndexes,
}

/// Classify a single-stage pipeline.
pub(crate) fn classify(pipeline: &[Value]) -> StoreResult<Stage> {
    let stage = pipeline.first().ok_or(StoreError::EmptyPipeline)?;
    let (name, body) = stage
        .as_object()
        .and_then(|obj| obj.iter().next())
        .ok_or_else(|| StoreError::UnsupportedStage(stage.to_string()))?;

    match name.as_str() {
        "$searchMeta" if body.get("count").is_some() => Ok(Stage::SearchMetaCount),
        "$count" => body
            .as_str()
            .map(|field| Stage::Count(field.to_string()))
            .ok_or_else(|| StoreError::UnsupportedStage(stage.to_string())),
        "$listSearchIndexes" => Ok(Stage::ListSearchIndexes),
        _ => Err(StoreError::UnsupportedStage(name.clone())),
    }
}

/// Result documents for a count stage over `total` documents.
pub(crate) fn count_results(stage: &Stage, total: u64) -> Vec<Value> {
    match stage {
        Stage::SearchMetaCount => vec![json!({ "count": { "total": total } })],
        Stage::Count(field) => {
            let mut doc = serde_json::Map::new();
            doc.insert(field.clone(), json!(total));
            vec![Value::Object(doc)]
        }
        Stage::ListSearchIndexes => Vec::new(),
    }
}
