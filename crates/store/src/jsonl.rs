//! JSON-lines file sink.

use crate::error::{StoreError, StoreResult};
use crate::pipeline::{classify, count_results, Stage};
use crate::traits::DocumentStore;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use vecbench_core::Document;

/// Appends each document as one JSON object per line.
///
/// Counting re-reads the file, so counts include lines written by earlier
/// runs against the same path.
#[derive(Debug)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        Ok(Self { path })
    }

    /// Open an existing file for appending. Fails if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        OpenOptions::new().append(true).open(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonLinesStore {
    type Error = StoreError;

    fn insert_many(&mut self, documents: Vec<Document>) -> StoreResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for doc in &documents {
            serde_json::to_writer(&mut writer, doc)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        tracing::debug!("Appended {} documents to {:?}", documents.len(), self.path);
        Ok(())
    }

    fn count_documents(&self) -> StoreResult<u64> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut count = 0;
        for line in reader.lines() {
            if !line?.trim().is_empty() {
                count += 1;
            }
        }
        Ok(count)
    }

    fn aggregate(&self, pipeline: &[Value]) -> StoreResult<Vec<Value>> {
        match classify(pipeline)? {
            Stage::ListSearchIndexes => Ok(Vec::new()),
            stage => Ok(count_results(&stage, self.count_documents()?)),
        }
    }
}
