//! Timing a single execution.

use crate::clock::Clock;
use std::hint::black_box;

/// A runnable's result together with how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_ms: f64,
}

/// Run `runnable` once and measure it.
///
/// The clock stops only after the returned value exists, so runnables must
/// hand back materialized results (collect iterators, drain cursors) or the
/// deferred work goes unmeasured. Errors are returned as-is.
pub fn time_one<C, F, T, E>(clock: &C, runnable: F) -> Result<Timed<T>, E>
where
    C: Clock + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    let start = clock.now_ms();
    let value = black_box(runnable()?);
    let end = clock.now_ms();

    Ok(Timed {
        value,
        elapsed_ms: end - start,
    })
}
