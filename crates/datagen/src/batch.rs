//! Batched inserts into a document store.

use crate::document::DocumentGenerator;
use crate::error::GenError;
use rand::Rng;
use std::num::NonZeroUsize;
use thiserror::Error;
use vecbench_store::DocumentStore;

/// Failure while seeding a store.
///
/// `Sink` carries the store's own error value untouched; its message and
/// `source()` chain are forwarded as-is.
#[derive(Error, Debug)]
pub enum InsertError<E> {
    #[error(transparent)]
    Generate(#[from] GenError),

    #[error(transparent)]
    Sink(E),
}

impl<E> InsertError<E> {
    /// The store error, if that is what failed.
    pub fn into_sink(self) -> Option<E> {
        match self {
            InsertError::Sink(e) => Some(e),
            InsertError::Generate(_) => None,
        }
    }
}

/// Sizes of the batches needed to produce `total` documents at most `cap`
/// at a time. Every batch is `cap` except the last, which holds the
/// remainder. Sums to `total`.
pub fn batch_plan(total: usize, cap: NonZeroUsize) -> impl Iterator<Item = usize> {
    let cap = cap.get();
    let remainder = total % cap;
    std::iter::repeat(cap)
        .take(total / cap)
        .chain((remainder > 0).then_some(remainder))
}

impl<R: Rng> DocumentGenerator<R> {
    /// Generate `total` documents and insert them into `sink` in batches of
    /// `batch_cap`, then return the sink's document count.
    ///
    /// `batch_cap` above the generator's `max_batch_size` is lowered to it so
    /// no batch is silently truncated. Store errors abort the run; batches
    /// already inserted stay inserted.
    pub fn generate_and_insert<S: DocumentStore>(
        &mut self,
        total: usize,
        sink: &mut S,
        batch_cap: NonZeroUsize,
    ) -> Result<u64, InsertError<S::Error>> {
        let max = self.config().max_batch_size;
        let cap = if batch_cap.get() > max {
            tracing::warn!("Batch cap {} exceeds max batch size, using {}", batch_cap, max);
            NonZeroUsize::new(max).unwrap_or(batch_cap)
        } else {
            batch_cap
        };

        let mut inserted = 0;
        for size in batch_plan(total, cap) {
            inserted += size;
            tracing::info!("Inserting documents {} of {}", inserted, total);
            let documents = self.generate_batch(size)?;
            sink.insert_many(documents).map_err(InsertError::Sink)?;
        }

        let count = sink.count_documents().map_err(InsertError::Sink)?;
        tracing::info!("Total documents in collection: {}", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;
    use vecbench_store::StoreError;

    fn plan(total: usize, cap: usize) -> Vec<usize> {
        batch_plan(total, NonZeroUsize::new(cap).unwrap()).collect()
    }

    #[test]
    fn test_sink_error_forwarded() {
        let err: InsertError<StoreError> =
            InsertError::Sink(StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));

        assert_eq!(err.to_string(), "IO error: disk full");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("disk full"));
        assert!(matches!(err.into_sink(), Some(StoreError::Io(_))));
    }

    #[test]
    fn test_plan_with_remainder() {
        assert_eq!(plan(600_000, 250_000), vec![250_000, 250_000, 100_000]);
        assert_eq!(plan(7, 3), vec![3, 3, 1]);
    }

    #[test]
    fn test_plan_exact_multiple() {
        assert_eq!(plan(500_000, 250_000), vec![250_000, 250_000]);
        assert_eq!(plan(3, 3), vec![3]);
    }

    #[test]
    fn test_plan_smaller_than_cap() {
        assert_eq!(plan(10, 250_000), vec![10]);
    }

    #[test]
    fn test_plan_empty() {
        assert!(plan(0, 5).is_empty());
    }

    #[test]
    fn test_plan_sums_to_total() {
        for total in [1, 2, 99, 100, 101, 12_345] {
            for cap in [1, 7, 100, 1_000] {
                assert_eq!(plan(total, cap).iter().sum::<usize>(), total);
                assert!(plan(total, cap).iter().all(|s| *s > 0 && *s <= cap));
            }
        }
    }
}
