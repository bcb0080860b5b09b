//! Random embedding vectors.

use crate::gaussian::BoxMuller;
use rand::Rng;
use rand::distributions::Uniform;
use rand_distr::Distribution;
use vecbench_core::{normalize, EmbeddingVector, VectorError, VectorKind, VectorResult};

/// Re-draws allowed when a unit vector comes out with zero norm.
pub const MAX_NORMALIZE_ATTEMPTS: usize = 8;

/// Generate one random vector of `kind` with `dimensions` components.
///
/// - `Unit`: standard normal components, scaled to L2 norm 1.
/// - `Float`: uniform in [-1, 1).
/// - `Int8`: uniform in [-128, 128).
/// - `Bit`: uniform bits, packed eight per byte (see `vecbench_core::vector`).
///   `dimensions` must be a multiple of 8.
pub fn generate_vector<R: Rng + ?Sized>(
    rng: &mut R,
    dimensions: usize,
    kind: VectorKind,
) -> VectorResult<EmbeddingVector> {
    kind.check_dimensions(dimensions)?;

    let vector = match kind {
        VectorKind::Unit => EmbeddingVector::Unit(unit_vector(rng, dimensions)?),
        VectorKind::Float => {
            let uniform = Uniform::new(-1.0f32, 1.0f32);
            EmbeddingVector::Float((0..dimensions).map(|_| uniform.sample(rng)).collect())
        }
        VectorKind::Int8 => EmbeddingVector::Int8((0..dimensions).map(|_| rng.gen::<i8>()).collect()),
        VectorKind::Bit => {
            let mut packed = vec![0u8; dimensions / 8];
            rng.fill(&mut packed[..]);
            EmbeddingVector::Bit(packed)
        }
    };
    Ok(vector)
}

fn unit_vector<R: Rng + ?Sized>(rng: &mut R, dimensions: usize) -> VectorResult<Vec<f32>> {
    for _ in 0..MAX_NORMALIZE_ATTEMPTS {
        let mut v: Vec<f32> = (0..dimensions)
            .map(|_| BoxMuller::STANDARD.sample(rng) as f32)
            .collect();
        if normalize(&mut v) {
            return Ok(v);
        }
        tracing::debug!("Zero-norm draw for {}-d unit vector, retrying", dimensions);
    }
    Err(VectorError::DegenerateVector {
        attempts: MAX_NORMALIZE_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vecbench_core::unpack_bits;

    #[test]
    fn test_unit_vectors_have_unit_norm() {
        let mut rng = StdRng::seed_from_u64(1);
        for dim in [1, 2, 3, 17, 128, 768, 1536] {
            let v = generate_vector(&mut rng, dim, VectorKind::Unit).unwrap();
            assert_eq!(v.kind(), VectorKind::Unit);
            assert_eq!(v.dimensions(), dim);
            assert!((v.norm() - 1.0).abs() < 1e-5, "dim {} norm {}", dim, v.norm());
        }
    }

    #[test]
    fn test_float_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let v = generate_vector(&mut rng, 4096, VectorKind::Float).unwrap();
        let values = v.as_f32().unwrap();
        assert_eq!(values.len(), 4096);
        assert!(values.iter().all(|x| (-1.0..1.0).contains(x)));
        assert!(values.iter().any(|x| *x < 0.0));
        assert!(values.iter().any(|x| *x > 0.0));
    }

    #[test]
    fn test_int8_covers_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = generate_vector(&mut rng, 20_000, VectorKind::Int8).unwrap();
        let values = v.as_i8().unwrap();
        assert_eq!(values.len(), 20_000);
        assert!(values.iter().any(|x| *x < -100));
        assert!(values.iter().any(|x| *x > 100));
    }

    #[test]
    fn test_bit_unpacks_to_dimensions() {
        let mut rng = StdRng::seed_from_u64(4);
        let v = generate_vector(&mut rng, 1024, VectorKind::Bit).unwrap();
        assert_eq!(v.packed_bits().unwrap().len(), 128);

        let bits = unpack_bits(v.packed_bits().unwrap());
        assert_eq!(bits.len(), 1024);
        assert!(bits.iter().all(|b| *b <= 1));
        let ones = bits.iter().filter(|b| **b == 1).count();
        assert!((400..624).contains(&ones), "ones {}", ones);
    }

    #[test]
    fn test_bit_rejects_unaligned_dimensions() {
        let mut rng = StdRng::seed_from_u64(5);
        for dim in [1, 7, 9, 767] {
            assert!(matches!(
                generate_vector(&mut rng, dim, VectorKind::Bit),
                Err(VectorError::InvalidDimension { dimensions, .. }) if dimensions == dim
            ));
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        for kind in VectorKind::ALL {
            assert!(generate_vector(&mut rng, 0, kind).is_err());
        }
    }

    #[test]
    fn test_degenerate_unit_vector() {
        // All-zero source yields z = 0 for every component.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            generate_vector(&mut rng, 16, VectorKind::Unit),
            Err(VectorError::DegenerateVector {
                attempts: MAX_NORMALIZE_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_vector(&mut StdRng::seed_from_u64(9), 64, VectorKind::Unit).unwrap();
        let b = generate_vector(&mut StdRng::seed_from_u64(9), 64, VectorKind::Unit).unwrap();
        assert_eq!(a, b);
    }
}
