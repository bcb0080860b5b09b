//! Similarity functions understood by the search index.

use serde::{Deserialize, Serialize};

/// Similarity function configured on a `knnVector` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Similarity {
    /// Angle between vectors, magnitude ignored.
    Cosine,
    /// Straight-line (L2) distance.
    Euclidean,
    /// Raw inner product. Only meaningful for unit-length vectors.
    DotProduct,
}

impl Similarity {
    /// All similarity functions, in index-definition order.
    pub const ALL: [Similarity; 3] = [
        Similarity::Cosine,
        Similarity::Euclidean,
        Similarity::DotProduct,
    ];

    /// Name as written in an index definition.
    pub fn as_str(self) -> &'static str {
        match self {
            Similarity::Cosine => "cosine",
            Similarity::Euclidean => "euclidean",
            Similarity::DotProduct => "dotProduct",
        }
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Similarity::Euclidean
    }
}

impl std::fmt::Display for Similarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Similarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Similarity::Cosine),
            "euclidean" | "l2" => Ok(Similarity::Euclidean),
            "dotproduct" | "dot_product" | "dot" => Ok(Similarity::DotProduct),
            _ => Err(format!("Unknown similarity: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("l2".parse::<Similarity>().unwrap(), Similarity::Euclidean);
        assert_eq!("dotProduct".parse::<Similarity>().unwrap(), Similarity::DotProduct);
        assert_eq!("COSINE".parse::<Similarity>().unwrap(), Similarity::Cosine);
        assert!("manhattan".parse::<Similarity>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for sim in Similarity::ALL {
            let json = serde_json::to_string(&sim).unwrap();
            assert_eq!(json, format!("\"{}\"", sim));
        }
    }
}
