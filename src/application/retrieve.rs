use crate::domain::entities::document::SearchResult;
use crate::domain::error::RagError;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct RetrieveUseCase {
    store: Arc<dyn VectorStore>,
}

impl RetrieveUseCase {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<SearchResult, RagError> {
        self.store.search(query_vector, top_k).await
    }
}
