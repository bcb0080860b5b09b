//! Synthetic document shape.

use crate::vector::EmbeddingVector;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One generated document. Every document has exactly these fields; only
/// the values differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Two random alphanumeric characters.
    pub string: String,
    /// Eight random alphanumeric characters.
    pub token: String,
    /// Uniform in [0, 100).
    pub number: f64,
    /// Uniform in [1970-01-01, 2025-01-01), millisecond precision.
    pub date: DateTime<Utc>,
    pub uuid: Uuid,
    pub vector: EmbeddingVector,
    pub boolean: bool,
    /// Uniform in [0, 1000). Kept in the index's stored source.
    pub stored: u32,
}

impl Document {
    /// Field names in serialization order.
    pub const FIELDS: [&'static str; 8] = [
        "string", "token", "number", "date", "uuid", "vector", "boolean", "stored",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_field_set() {
        let doc = Document {
            string: "ab".into(),
            token: "abcdefgh".into(),
            number: 42.5,
            date: Utc.timestamp_millis_opt(0).unwrap(),
            uuid: Uuid::nil(),
            vector: EmbeddingVector::Float(vec![0.25, -0.5]),
            boolean: true,
            stored: 7,
        };

        let json = serde_json::to_value(&doc).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), Document::FIELDS.len());
        for field in Document::FIELDS {
            assert!(obj.contains_key(field), "missing {}", field);
        }
        assert_eq!(obj["vector"], serde_json::json!([0.25, -0.5]));
        assert_eq!(obj["stored"], serde_json::json!(7));
    }
}
