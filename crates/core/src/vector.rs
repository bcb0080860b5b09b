//! Embedding vector variants and their byte layouts.
//!
//! # Bit packing
//!
//! A `Bit` vector stores its 0/1 components eight per byte, most significant
//! bit first: component `i` lives in byte `i / 8` at bit `7 - (i % 8)`.
//! [`pack_bits`] and [`unpack_bits`] convert between the two forms.
//!
//! # Binary encoding
//!
//! [`EmbeddingVector::to_bytes`] produces the layout search engines accept for
//! binary vector fields:
//!
//! ```text
//! [dtype: u8][padding: u8][payload ...]
//! ```
//!
//! `dtype` is `0x27` (float32, little-endian), `0x03` (int8) or `0x10`
//! (packed bit). `padding` counts unused trailing bits of the last packed
//! byte and is always zero for the vectors generated here.

use crate::distance::l2_norm;
use crate::error::{VectorError, VectorResult};
use crate::similarity::Similarity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensionality used when the caller does not pick one.
pub const DEFAULT_DIMENSIONS: usize = 768;

const DTYPE_FLOAT32: u8 = 0x27;
const DTYPE_INT8: u8 = 0x03;
const DTYPE_PACKED_BIT: u8 = 0x10;

/// The four vector encodings the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorKind {
    /// Unit-length float32 vectors.
    Unit,
    /// Unnormalized float32 vectors.
    Float,
    /// Signed 8-bit integer vectors.
    Int8,
    /// Packed single-bit vectors.
    Bit,
}

impl VectorKind {
    pub const ALL: [VectorKind; 4] = [
        VectorKind::Unit,
        VectorKind::Float,
        VectorKind::Int8,
        VectorKind::Bit,
    ];

    /// Whether an index using `similarity` can hold vectors of this kind.
    ///
    /// Every kind supports cosine and euclidean; only unit vectors support
    /// dot product.
    pub fn supports(self, similarity: Similarity) -> bool {
        match similarity {
            Similarity::Cosine | Similarity::Euclidean => true,
            Similarity::DotProduct => self == VectorKind::Unit,
        }
    }

    /// Similarity functions usable with this kind.
    pub fn similarities(self) -> Vec<Similarity> {
        Similarity::ALL
            .into_iter()
            .filter(|s| self.supports(*s))
            .collect()
    }

    /// Check that `dimensions` is a legal size for this kind.
    pub fn check_dimensions(self, dimensions: usize) -> VectorResult<()> {
        if dimensions == 0 {
            return Err(VectorError::InvalidDimension {
                dimensions,
                reason: "dimensions must be > 0",
            });
        }
        if self == VectorKind::Bit && dimensions % 8 != 0 {
            return Err(VectorError::InvalidDimension {
                dimensions,
                reason: "bit vector dimensions must be a multiple of 8",
            });
        }
        Ok(())
    }
}

impl Default for VectorKind {
    fn default() -> Self {
        VectorKind::Unit
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorKind::Unit => "unit",
            VectorKind::Float => "float",
            VectorKind::Int8 => "int8",
            VectorKind::Bit => "bit",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for VectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unit" => Ok(VectorKind::Unit),
            "float" | "float32" => Ok(VectorKind::Float),
            "int8" => Ok(VectorKind::Int8),
            "bit" | "binary" => Ok(VectorKind::Bit),
            _ => Err(format!("Unknown vector kind: {}", s)),
        }
    }
}

/// A generated embedding. Serializes as a flat array of its stored
/// components (packed bytes for `Bit`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingVector {
    Unit(Vec<f32>),
    Float(Vec<f32>),
    Int8(Vec<i8>),
    Bit(Vec<u8>),
}

impl EmbeddingVector {
    pub fn kind(&self) -> VectorKind {
        match self {
            EmbeddingVector::Unit(_) => VectorKind::Unit,
            EmbeddingVector::Float(_) => VectorKind::Float,
            EmbeddingVector::Int8(_) => VectorKind::Int8,
            EmbeddingVector::Bit(_) => VectorKind::Bit,
        }
    }

    /// Logical dimensionality (bits, not bytes, for `Bit`).
    pub fn dimensions(&self) -> usize {
        match self {
            EmbeddingVector::Unit(v) | EmbeddingVector::Float(v) => v.len(),
            EmbeddingVector::Int8(v) => v.len(),
            EmbeddingVector::Bit(packed) => packed.len() * 8,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            EmbeddingVector::Unit(v) | EmbeddingVector::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<&[i8]> {
        match self {
            EmbeddingVector::Int8(v) => Some(v),
            _ => None,
        }
    }

    pub fn packed_bits(&self) -> Option<&[u8]> {
        match self {
            EmbeddingVector::Bit(packed) => Some(packed),
            _ => None,
        }
    }

    /// Flatten into one `f32` per logical dimension. Bit vectors are
    /// unpacked to 0.0 / 1.0.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        match self {
            EmbeddingVector::Unit(v) | EmbeddingVector::Float(v) => v.clone(),
            EmbeddingVector::Int8(v) => v.iter().map(|x| *x as f32).collect(),
            EmbeddingVector::Bit(packed) => {
                unpack_bits(packed).into_iter().map(|b| b as f32).collect()
            }
        }
    }

    /// L2 norm of the flattened vector.
    pub fn norm(&self) -> f64 {
        match self {
            EmbeddingVector::Unit(v) | EmbeddingVector::Float(v) => l2_norm(v),
            _ => l2_norm(&self.to_f32_vec()),
        }
    }

    /// Encode into the `[dtype][padding][payload]` layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            EmbeddingVector::Unit(v) | EmbeddingVector::Float(v) => {
                let mut bytes = Vec::with_capacity(2 + v.len() * 4);
                bytes.push(DTYPE_FLOAT32);
                bytes.push(0);
                for x in v {
                    bytes.extend_from_slice(&x.to_le_bytes());
                }
                bytes
            }
            EmbeddingVector::Int8(v) => {
                let mut bytes = Vec::with_capacity(2 + v.len());
                bytes.push(DTYPE_INT8);
                bytes.push(0);
                bytes.extend(v.iter().map(|x| *x as u8));
                bytes
            }
            EmbeddingVector::Bit(packed) => {
                let mut bytes = Vec::with_capacity(2 + packed.len());
                bytes.push(DTYPE_PACKED_BIT);
                bytes.push(0);
                bytes.extend_from_slice(packed);
                bytes
            }
        }
    }

    /// Decode the `[dtype][padding][payload]` layout.
    ///
    /// Float32 payloads always decode as `Float`: the byte layout does not
    /// record whether the vector was normalized.
    pub fn from_bytes(data: &[u8]) -> VectorResult<Self> {
        if data.len() < 2 {
            return Err(VectorError::InvalidEncoding(
                "missing dtype/padding header".into(),
            ));
        }
        let (dtype, padding, payload) = (data[0], data[1], &data[2..]);

        match dtype {
            DTYPE_FLOAT32 => {
                if padding != 0 || payload.len() % 4 != 0 {
                    return Err(VectorError::InvalidEncoding(format!(
                        "float32 payload of {} bytes with padding {}",
                        payload.len(),
                        padding
                    )));
                }
                let values = payload
                    .chunks_exact(4)
                    .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect();
                Ok(EmbeddingVector::Float(values))
            }
            DTYPE_INT8 => {
                if padding != 0 {
                    return Err(VectorError::InvalidEncoding(format!(
                        "int8 vector with padding {}",
                        padding
                    )));
                }
                Ok(EmbeddingVector::Int8(
                    payload.iter().map(|b| *b as i8).collect(),
                ))
            }
            DTYPE_PACKED_BIT => {
                if padding != 0 {
                    return Err(VectorError::InvalidEncoding(format!(
                        "packed bit vector with {} padding bits is not byte aligned",
                        padding
                    )));
                }
                Ok(EmbeddingVector::Bit(payload.to_vec()))
            }
            other => Err(VectorError::InvalidEncoding(format!(
                "unknown dtype 0x{:02x}",
                other
            ))),
        }
    }
}

/// Pack a 0/1 sequence eight per byte, most significant bit first.
pub fn pack_bits(bits: &[u8]) -> VectorResult<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(VectorError::InvalidDimension {
            dimensions: bits.len(),
            reason: "bit vector dimensions must be a multiple of 8",
        });
    }
    if let Some(bad) = bits.iter().find(|b| **b > 1) {
        return Err(VectorError::InvalidEncoding(format!(
            "bit value {} is not 0 or 1",
            bad
        )));
    }

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | bit))
        .collect())
}

/// Expand packed bytes into one 0/1 value per bit, in original order.
pub fn unpack_bits(packed: &[u8]) -> Vec<u8> {
    packed
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_pack_msb_first() {
        let bits = [1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0];
        assert_eq!(pack_bits(&bits).unwrap(), vec![0b1000_0001, 0b0100_0000]);
    }

    #[test]
    fn test_unpack_reverses_pack() {
        let mut rng = StdRng::seed_from_u64(7);
        let bits: Vec<u8> = (0..256).map(|_| rng.gen_range(0..2)).collect();
        let packed = pack_bits(&bits).unwrap();
        assert_eq!(packed.len(), 32);
        assert_eq!(unpack_bits(&packed), bits);
    }

    #[test]
    fn test_pack_rejects_bad_input() {
        assert!(matches!(
            pack_bits(&[1, 0, 1]),
            Err(VectorError::InvalidDimension { dimensions: 3, .. })
        ));
        assert!(matches!(
            pack_bits(&[2, 0, 0, 0, 0, 0, 0, 0]),
            Err(VectorError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_kind_similarities() {
        assert_eq!(VectorKind::Unit.similarities(), Similarity::ALL.to_vec());
        for kind in [VectorKind::Float, VectorKind::Int8, VectorKind::Bit] {
            assert!(kind.supports(Similarity::Cosine));
            assert!(kind.supports(Similarity::Euclidean));
            assert!(!kind.supports(Similarity::DotProduct));
        }
    }

    #[test]
    fn test_check_dimensions() {
        assert!(VectorKind::Unit.check_dimensions(0).is_err());
        assert!(VectorKind::Float.check_dimensions(3).is_ok());
        assert!(VectorKind::Bit.check_dimensions(16).is_ok());
        assert_eq!(
            VectorKind::Bit.check_dimensions(12),
            Err(VectorError::InvalidDimension {
                dimensions: 12,
                reason: "bit vector dimensions must be a multiple of 8",
            })
        );
    }

    #[test]
    fn test_dimensions_counts_bits() {
        let v = EmbeddingVector::Bit(vec![0xff, 0x00, 0x0f]);
        assert_eq!(v.dimensions(), 24);
        assert_eq!(v.to_f32_vec().iter().filter(|x| **x == 1.0).count(), 12);
    }

    #[test]
    fn test_binary_encoding() {
        let float = EmbeddingVector::Float(vec![0.5, -1.0]);
        let bytes = float.to_bytes();
        assert_eq!(bytes[0], 0x27);
        assert_eq!(bytes.len(), 2 + 8);
        assert_eq!(EmbeddingVector::from_bytes(&bytes).unwrap(), float);

        let int8 = EmbeddingVector::Int8(vec![-128, 0, 127]);
        assert_eq!(int8.to_bytes(), vec![0x03, 0, 0x80, 0x00, 0x7f]);
        assert_eq!(EmbeddingVector::from_bytes(&int8.to_bytes()).unwrap(), int8);

        let bit = EmbeddingVector::Bit(vec![0b1010_1010]);
        assert_eq!(EmbeddingVector::from_bytes(&bit.to_bytes()).unwrap(), bit);
    }

    #[test]
    fn test_unit_decodes_as_float() {
        let unit = EmbeddingVector::Unit(vec![0.6, 0.8]);
        let decoded = EmbeddingVector::from_bytes(&unit.to_bytes()).unwrap();
        assert_eq!(decoded.kind(), VectorKind::Float);
        assert_eq!(decoded.as_f32(), unit.as_f32());
    }

    #[test]
    fn test_decode_errors() {
        assert!(EmbeddingVector::from_bytes(&[0x27]).is_err());
        assert!(EmbeddingVector::from_bytes(&[0x27, 0, 1, 2, 3]).is_err());
        assert!(EmbeddingVector::from_bytes(&[0x10, 3, 0xff]).is_err());
        assert!(EmbeddingVector::from_bytes(&[0x42, 0]).is_err());
    }

    #[test]
    fn test_serializes_flat() {
        let v = EmbeddingVector::Int8(vec![-1, 2]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[-1,2]");
        let b = EmbeddingVector::Bit(vec![255]);
        assert_eq!(serde_json::to_string(&b).unwrap(), "[255]");
    }
}
