//! Integration tests for the JSON-lines store.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;
use uuid::Uuid;
use vecbench_core::{Document, EmbeddingVector};
use vecbench_store::{count_pipeline, count_total, DocumentStore, JsonLinesStore, StoreError};

fn document(stored: u32) -> Document {
    Document {
        string: "xy".to_string(),
        token: "tok12345".to_string(),
        number: 1.5,
        date: Utc.timestamp_millis_opt(1_000).unwrap(),
        uuid: Uuid::new_v4(),
        vector: EmbeddingVector::Bit(vec![0b1000_0000]),
        boolean: false,
        stored,
    }
}

#[test]
fn test_insert_and_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.jsonl");
    let mut store = JsonLinesStore::create(&path).unwrap();

    store.insert_many((0..3).map(document).collect()).unwrap();
    store.insert_many((3..5).map(document).collect()).unwrap();

    assert_eq!(store.count_documents().unwrap(), 5);
    let results = store.aggregate(&count_pipeline()).unwrap();
    assert_eq!(count_total(&results).unwrap(), 5);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4]["stored"], 4);
    assert_eq!(lines[0]["vector"], json!([128]));
}

#[test]
fn test_reopen_keeps_existing_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.jsonl");
    {
        let mut store = JsonLinesStore::create(&path).unwrap();
        store.insert_many(vec![document(1)]).unwrap();
    }

    let mut store = JsonLinesStore::open(&path).unwrap();
    store.insert_many(vec![document(2)]).unwrap();
    assert_eq!(store.count_documents().unwrap(), 2);

    // create truncates
    let store = JsonLinesStore::create(&path).unwrap();
    assert_eq!(store.count_documents().unwrap(), 0);
}

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let err = JsonLinesStore::open(dir.path().join("missing.jsonl")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn test_unsupported_stage() {
    let dir = tempdir().unwrap();
    let store = JsonLinesStore::create(dir.path().join("docs.jsonl")).unwrap();
    let err = store.aggregate(&[json!({"$search": {}})]).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedStage(_)));
}
