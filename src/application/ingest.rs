use crate::domain::entities::document::Document;
use crate::domain::error::RagError;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct IngestUseCase {
    store: Arc<dyn VectorStore>,
}

impl IngestUseCase {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// Upsert the batch, returning the number of documents submitted.
    pub async fn execute(&self, documents: &[Document]) -> Result<usize, RagError> {
        if documents.is_empty() {
            return Ok(0);
        }
        self.store.upsert(documents).await?;
        Ok(documents.len())
    }
}
