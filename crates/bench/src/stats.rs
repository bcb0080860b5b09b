//! Summary statistics over timing samples.
//!
//! These are plain functions over `&[f64]` and know nothing about clocks.
//!
//! The confidence interval uses the normal approximation with a fixed
//! z = 1.96 at every sample size. For small `n` a Student's t critical value
//! would give a wider (correct) interval; the fixed z keeps results
//! comparable with earlier reports. With a single sample the standard
//! deviation is 0/0 and both it and the margin come out NaN.

use serde::Serialize;
use std::fmt;

/// z-score for a two-sided 95% interval.
pub const Z_95: f64 = 1.96;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation with Bessel's correction (divides by `n - 1`).
///
/// NaN when `n < 2`.
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - m).powi(2)).sum();
    (sum_sq / (samples.len() as f64 - 1.0)).sqrt()
}

/// Half-width of the 95% confidence interval: `1.96 * std_dev / sqrt(n)`.
pub fn ci95_margin(std_dev: f64, n: usize) -> f64 {
    Z_95 * std_dev / (n as f64).sqrt()
}

/// Reduced timings for one runnable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub name: String,
    /// Elapsed milliseconds of each measured trial, in order.
    pub samples: Vec<f64>,
    pub mean: f64,
    pub std_dev: f64,
    /// 95% confidence interval half-width.
    pub margin: f64,
}

impl Summary {
    pub fn from_samples(name: impl Into<String>, samples: &[f64]) -> Self {
        let mean = mean(samples);
        let std_dev = sample_std_dev(samples);
        Self {
            name: name.into(),
            samples: samples.to_vec(),
            mean,
            std_dev,
            margin: ci95_margin(std_dev, samples.len()),
        }
    }

    /// Number of measured trials.
    pub fn n(&self) -> usize {
        self.samples.len()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Average time taken: {:.2} ± {:.2} ms (95% CI); stddev: {:.2}",
            self.name, self.mean, self.margin, self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "Expected {} to be close to {}", a, b);
    }

    #[test]
    fn test_mean() {
        assert_close(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_std_dev_uses_bessel() {
        // squared deviations from 5: 9+1+1+1+0+0+4+16 = 32, / 7
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_close(sample_std_dev(&samples), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn test_constant_samples() {
        let summary = Summary::from_samples("flat", &[100.0; 5]);
        assert_close(summary.mean, 100.0);
        assert_close(summary.std_dev, 0.0);
        assert_close(summary.margin, 0.0);
    }

    #[test]
    fn test_margin() {
        let summary = Summary::from_samples("x", &[10.0, 20.0, 30.0, 40.0]);
        // std_dev = sqrt(500 / 3)
        let sd = (500.0f64 / 3.0).sqrt();
        assert_close(summary.std_dev, sd);
        assert_close(summary.margin, 1.96 * sd / 2.0);
    }

    #[test]
    fn test_single_sample_is_nan() {
        let summary = Summary::from_samples("once", &[42.0]);
        assert_close(summary.mean, 42.0);
        assert!(summary.std_dev.is_nan());
        assert!(summary.margin.is_nan());
        assert_eq!(
            summary.to_string(),
            "once: Average time taken: 42.00 ± NaN ms (95% CI); stddev: NaN"
        );
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let summary = Summary {
            name: "0".to_string(),
            samples: vec![],
            mean: 101.23456,
            std_dev: 0.006,
            margin: 1.0,
        };
        assert_eq!(
            summary.to_string(),
            "0: Average time taken: 101.23 ± 1.00 ms (95% CI); stddev: 0.01"
        );
    }
}
