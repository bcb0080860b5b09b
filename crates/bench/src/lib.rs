//! Latency comparison engine.
//!
//! Times zero-argument runnables, optionally over repeated trials, and
//! reduces each runnable's samples to mean, standard deviation and a 95%
//! confidence interval.
//!
//! Everything runs on the calling thread, one runnable at a time, so one
//! measurement never overlaps another.
//!
//! # Example
//! ```ignore
//! use vecbench_bench::{compare, MonotonicClock};
//!
//! let clock = MonotonicClock::new();
//! let mut runnables: Vec<Box<dyn FnMut() -> Result<u64, StoreError>>> = vec![
//!     Box::new(|| store.count_documents()),
//!     Box::new(|| store.aggregate(&count_pipeline()).map(|r| r.len() as u64)),
//! ];
//! let report = compare(&clock, &mut runnables, 10, &["countDocuments", "searchMeta"])?;
//! println!("{}", report);
//! ```

pub mod clock;
pub mod compare;
pub mod config;
pub mod error;
pub mod stats;
pub mod timing;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use compare::{compare, resolve_names, time_n, Comparison};
pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use stats::{ci95_margin, mean, sample_std_dev, Summary, Z_95};
pub use timing::{time_one, Timed};
