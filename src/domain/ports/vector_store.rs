use crate::domain::entities::document::{Document, SearchResult};
use crate::domain::error::RagError;
use crate::domain::values::metric::Metric;

/// Default number of matches requested from a search.
pub const DEFAULT_TOP_K: usize = 2;

/// Connection parameters shared by vector-store backends.
#[derive(Debug, Clone)]
pub struct VectorStoreConfig {
    /// Auth token for the backing service. Ignored by local backends.
    pub api_key: String,
    /// Deployment region / cluster of the backing service.
    pub environment: String,
    /// Logical collection name. Created on connect when absent.
    pub index_name: String,
    /// Vector width, fixed per index.
    pub dimension: usize,
    pub metric: Metric,
}

impl VectorStoreConfig {
    /// Local validation, run before any backend call.
    pub fn validate(&self) -> Result<(), RagError> {
        if self.dimension == 0 {
            return Err(RagError::Configuration(
                "dimension must be positive".to_string(),
            ));
        }
        if self.index_name.is_empty() {
            return Err(RagError::Configuration(
                "index_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Minimal capability surface any vector database can be adapted behind:
/// upsert documents, search nearest neighbors. Index lifecycle beyond lazy
/// creation (deletion, reconfiguration) belongs to the backing service.
#[async_trait::async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert-or-replace the batch, keyed by document id.
    async fn upsert(&self, documents: &[Document]) -> Result<(), RagError>;

    /// Up to `top_k` matches ordered by descending similarity. Returns scores
    /// and ids only, never stored vector values. `top_k` must be >= 1.
    async fn search(&self, query_vector: &[f32], top_k: usize) -> Result<SearchResult, RagError>;

    /// Configured vector width of the index.
    fn dimension(&self) -> usize;
}
