use serde::{Deserialize, Serialize};

/// A vectorized document as submitted for upsert: a caller-assigned integer
/// id, the embedding values, and optional opaque metadata stored alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub values: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Document {
    pub fn new(id: i64, values: Vec<f32>) -> Self {
        Self {
            id,
            values,
            metadata: None,
        }
    }

    pub fn with_metadata(id: i64, values: Vec<f32>, metadata: serde_json::Value) -> Self {
        Self {
            id,
            values,
            metadata: Some(metadata),
        }
    }

    /// The `"text"` metadata field, when present. Used by the facade to keep
    /// a retrievable corpus beside the index.
    pub fn text(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m["text"].as_str())
    }
}

/// Search output: parallel arrays of similarity scores and document ids,
/// ordered by descending similarity. Never longer than the requested `top_k`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub distances: Vec<f64>,
    pub ids: Vec<i64>,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
