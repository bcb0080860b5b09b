//! Vector math used when building and checking embeddings.
//!
//! Sums accumulate in `f64`; at 768+ dimensions the `f32` rounding error is
//! large enough to push a normalised vector's norm outside 1e-6.

/// Euclidean (L2) norm.
#[inline]
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
}

/// Divide every component by the vector's L2 norm.
///
/// Returns `false` and leaves the vector untouched when the norm is zero or
/// not finite.
pub fn normalize(v: &mut [f32]) -> bool {
    let norm = l2_norm(v);
    if norm == 0.0 || !norm.is_finite() {
        return false;
    }
    for x in v.iter_mut() {
        *x = (*x as f64 / norm) as f32;
    }
    true
}
