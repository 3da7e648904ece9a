use crate::domain::entities::document::{Document, SearchResult};
use crate::domain::error::RagError;
use crate::domain::ports::vector_store::{VectorStore, VectorStoreConfig};
use crate::domain::values::metric::Metric;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Brute-force in-process store. The local counterpart to a managed vector
/// database: same contract, no service behind it, contents gone when the
/// process exits.
pub struct InMemoryStore {
    vectors: Mutex<HashMap<i64, Vec<f32>>>,
    dimension: usize,
    metric: Metric,
}

impl InMemoryStore {
    pub fn new(dimension: usize, metric: Metric) -> Result<Self, RagError> {
        if dimension == 0 {
            return Err(RagError::Configuration(
                "dimension must be positive".to_string(),
            ));
        }
        Ok(Self {
            vectors: Mutex::new(HashMap::new()),
            dimension,
            metric,
        })
    }

    pub fn from_config(config: &VectorStoreConfig) -> Result<Self, RagError> {
        config.validate()?;
        Self::new(config.dimension, config.metric)
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    fn dot_product(a: &[f32], b: &[f32]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| *x as f64 * *y as f64)
            .sum()
    }

    // Negated so that descending order means nearest-first, matching the
    // similarity metrics.
    fn neg_euclidean(a: &[f32], b: &[f32]) -> f64 {
        let sq: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = *x as f64 - *y as f64;
                d * d
            })
            .sum();
        -sq.sqrt()
    }

    fn score(&self, a: &[f32], b: &[f32]) -> f64 {
        match self.metric {
            Metric::Cosine => Self::cosine_similarity(a, b),
            Metric::DotProduct => Self::dot_product(a, b),
            Metric::Euclidean => Self::neg_euclidean(a, b),
        }
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryStore {
    async fn upsert(&self, documents: &[Document]) -> Result<(), RagError> {
        for doc in documents {
            if doc.values.len() != self.dimension {
                return Err(RagError::Backend(format!(
                    "Dimension mismatch for id {}: expected {}, got {}",
                    doc.id,
                    self.dimension,
                    doc.values.len()
                )));
            }
        }
        let mut vectors = self.vectors.lock().map_err(|e| e.to_string())?;
        for doc in documents {
            vectors.insert(doc.id, doc.values.clone());
        }
        debug!(count = documents.len(), "upserted vectors");
        Ok(())
    }

    async fn search(&self, query_vector: &[f32], top_k: usize) -> Result<SearchResult, RagError> {
        if top_k == 0 {
            return Err(RagError::Configuration("top_k must be >= 1".to_string()));
        }
        if query_vector.len() != self.dimension {
            return Err(RagError::Backend(format!(
                "Dimension mismatch: expected {}, got {}",
                self.dimension,
                query_vector.len()
            )));
        }

        let vectors = self.vectors.lock().map_err(|e| e.to_string())?;
        let mut scored: Vec<(i64, f64)> = vectors
            .iter()
            .map(|(id, stored)| (*id, self.score(query_vector, stored)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        Ok(SearchResult {
            distances: scored.iter().map(|(_, s)| *s).collect(),
            ids: scored.iter().map(|(id, _)| *id).collect(),
        })
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
