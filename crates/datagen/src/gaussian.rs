//! Box–Muller normal sampler.

use crate::error::{GenError, GenResult};
use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::PI;

/// Normal distribution sampled with the basic Box–Muller transform.
///
/// Each sample consumes two uniforms `u` in (0, 1] and `v` in [0, 1) and
/// returns `sqrt(-2 ln u) * cos(2πv) * std_dev + mean`. The paired sine
/// deviate is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std_dev: f64,
}

impl BoxMuller {
    /// Mean 0, standard deviation 1.
    pub const STANDARD: BoxMuller = BoxMuller {
        mean: 0.0,
        std_dev: 1.0,
    };

    pub fn new(mean: f64, std_dev: f64) -> GenResult<Self> {
        if !mean.is_finite() {
            return Err(GenError::InvalidConfig(format!(
                "normal mean must be finite, got {}",
                mean
            )));
        }
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return Err(GenError::InvalidConfig(format!(
                "normal std_dev must be finite and >= 0, got {}",
                std_dev
            )));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen::<f64>() is in [0, 1); flip it so ln(u) stays finite
        let u = 1.0 - rng.gen::<f64>();
        let v = rng.gen::<f64>();
        let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
        z * self.std_dev + self.mean
    }
}
