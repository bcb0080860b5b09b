//! Comparing runnables over repeated trials.

use crate::clock::Clock;
use crate::stats::Summary;
use crate::timing::time_one;
use serde::Serialize;
use std::fmt;

/// Per-runnable summaries from one comparison, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub trials: usize,
    pub summaries: Vec<Summary>,
}

impl Comparison {
    pub fn get(&self, name: &str) -> Option<&Summary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    /// One report line per runnable, in input order.
    pub fn lines(&self) -> Vec<String> {
        self.summaries.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, summary) in self.summaries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", summary)?;
        }
        Ok(())
    }
}

/// Display names for `count` runnables.
///
/// Runnable `i` takes `names[i]` when given, otherwise its own index `i`, so
/// `["a"]` over three runnables gives `a, 1, 2`. The older shell helper
/// appended the default names after the given ones and gave `a, 0, 1`
/// instead. Surplus names are ignored.
pub fn resolve_names<S: AsRef<str>>(names: &[S], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            names
                .get(i)
                .map(|n| n.as_ref().to_string())
                .unwrap_or_else(|| i.to_string())
        })
        .collect()
}

/// Time each runnable over `trials` measured rounds.
///
/// Each runnable first runs once as a warm-up; that timing is discarded.
/// Then every trial runs each runnable once, in input order. The first
/// error from any runnable aborts the comparison and is returned unchanged;
/// timings collected so far are dropped.
///
/// With `trials == 1` the standard deviation and margin are NaN; with
/// `trials == 0` the mean is NaN as well.
pub fn compare<C, F, T, E, S>(
    clock: &C,
    runnables: &mut [F],
    trials: usize,
    names: &[S],
) -> Result<Comparison, E>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<T, E>,
    S: AsRef<str>,
{
    let names = resolve_names(names, runnables.len());

    for (name, runnable) in names.iter().zip(runnables.iter_mut()) {
        let warmup = time_one(clock, &mut *runnable)?;
        tracing::debug!("{}: warm-up took {:.2} ms", name, warmup.elapsed_ms);
    }

    let mut timings: Vec<Vec<f64>> = vec![Vec::with_capacity(trials); runnables.len()];
    for trial in 0..trials {
        for (j, runnable) in runnables.iter_mut().enumerate() {
            let timed = time_one(clock, &mut *runnable)?;
            tracing::debug!(
                "{}: trial {} took {:.2} ms",
                names[j],
                trial + 1,
                timed.elapsed_ms
            );
            timings[j].push(timed.elapsed_ms);
        }
    }

    let summaries = names
        .into_iter()
        .zip(timings)
        .map(|(name, samples)| Summary::from_samples(name, &samples))
        .collect();

    Ok(Comparison { trials, summaries })
}

/// Time a single runnable.
///
/// With more than one trial this is `compare` on a one-element list. With
/// one trial (or zero) the runnable executes once, without warm-up, and the
/// result holds that single sample under the name `0`.
pub fn time_n<C, F, T, E>(clock: &C, runnable: F, trials: usize) -> Result<Comparison, E>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<T, E>,
{
    let mut runnables = [runnable];
    if trials > 1 {
        return compare(clock, &mut runnables, trials, &[] as &[&str]);
    }

    let timed = time_one(clock, &mut runnables[0])?;
    tracing::debug!("Time taken: {:.2} ms", timed.elapsed_ms);
    Ok(Comparison {
        trials: 1,
        summaries: vec![Summary::from_samples("0", &[timed.elapsed_ms])],
    })
}
