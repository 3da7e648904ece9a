pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::answer::AnswerUseCase;
use crate::application::ingest::IngestUseCase;
use crate::application::retrieve::RetrieveUseCase;
use crate::domain::entities::document::{Document, SearchResult};
use crate::domain::error::RagError;
use crate::domain::ports::generator::{Device, Generator, GeneratorConfig};
use crate::domain::ports::vector_store::{VectorStore, VectorStoreConfig};
use crate::domain::values::metric::Metric;
use crate::infrastructure::generators::canned::CannedGenerator;
use crate::infrastructure::generators::ollama::OllamaGenerator;
use crate::infrastructure::generators::openai::OpenAiGenerator;
use crate::infrastructure::vector_stores::memory::InMemoryStore;
use crate::infrastructure::vector_stores::pinecone::PineconeStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Facade wiring one vector store and one generator into a
/// retrieve-then-generate pipeline. Keeps an id-to-text registry beside the
/// index so retrieved ids can be resolved back into context strings.
pub struct Rag {
    ingest_uc: IngestUseCase,
    retrieve_uc: RetrieveUseCase,
    answer_uc: AnswerUseCase,
    texts: Mutex<HashMap<i64, String>>,
}

impl Rag {
    /// Select backends by explicit configuration from the environment:
    /// `RAGKIT_VECTOR_STORE` (`pinecone` | `memory`, default `memory`) and
    /// `RAGKIT_GENERATOR` (`openai` | `ollama` | `canned`, default `canned`).
    pub async fn from_env() -> Result<Self, RagError> {
        let store_kind =
            std::env::var("RAGKIT_VECTOR_STORE").unwrap_or_else(|_| "memory".into());
        let gen_kind = std::env::var("RAGKIT_GENERATOR").unwrap_or_else(|_| "canned".into());

        let store_config = store_config_from_env()?;
        let store: Arc<dyn VectorStore> = match store_kind.as_str() {
            "pinecone" => Arc::new(PineconeStore::connect(store_config, None).await?),
            "memory" => Arc::new(InMemoryStore::from_config(&store_config)?),
            other => {
                return Err(RagError::Configuration(format!(
                    "Unknown vector store backend: {other}"
                )))
            }
        };

        let gen_config = generator_config_from_env()?;
        let generator: Arc<dyn Generator> = match gen_kind.as_str() {
            "openai" => {
                let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
                Arc::new(OpenAiGenerator::new(gen_config, api_key, None)?)
            }
            "ollama" => Arc::new(OllamaGenerator::connect(gen_config, None).await?),
            "canned" => Arc::new(CannedGenerator::new("")),
            other => {
                return Err(RagError::Configuration(format!(
                    "Unknown generator backend: {other}"
                )))
            }
        };

        Ok(Self::with_backends(store, generator))
    }

    pub fn with_backends(store: Arc<dyn VectorStore>, generator: Arc<dyn Generator>) -> Self {
        Self {
            ingest_uc: IngestUseCase::new(store.clone()),
            retrieve_uc: RetrieveUseCase::new(store),
            answer_uc: AnswerUseCase::new(generator),
            texts: Mutex::new(HashMap::new()),
        }
    }

    /// Upsert documents; any `"text"` metadata is kept in the registry for
    /// later context resolution. Returns the number of documents submitted.
    pub async fn ingest(&self, documents: &[Document]) -> Result<usize, RagError> {
        let count = self.ingest_uc.execute(documents).await?;
        let mut texts = self.texts.lock().map_err(|e| e.to_string())?;
        for doc in documents {
            if let Some(text) = doc.text() {
                texts.insert(doc.id, text.to_string());
            }
        }
        Ok(count)
    }

    pub async fn search(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<SearchResult, RagError> {
        self.retrieve_uc.execute(query_vector, top_k).await
    }

    /// Generate with caller-supplied context, no retrieval involved.
    pub async fn generate(&self, query: &str, context: &[String]) -> Result<String, RagError> {
        self.answer_uc.execute(query, context).await
    }

    /// Full pipeline: search with `query_vector`, resolve the returned ids to
    /// registered texts (ids without a registered text are skipped), then
    /// generate conditioned on them.
    pub async fn answer(
        &self,
        query: &str,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<String, RagError> {
        let result = self.retrieve_uc.execute(query_vector, top_k).await?;
        let context = {
            let texts = self.texts.lock().map_err(|e| e.to_string())?;
            result
                .ids
                .iter()
                .filter_map(|id| texts.get(id).cloned())
                .collect::<Vec<String>>()
        };
        self.answer_uc.execute(query, &context).await
    }
}

fn store_config_from_env() -> Result<VectorStoreConfig, RagError> {
    let dimension = match std::env::var("RAGKIT_DIMENSION") {
        Ok(v) => v
            .parse::<usize>()
            .map_err(|_| RagError::Configuration(format!("Invalid RAGKIT_DIMENSION: {v}")))?,
        Err(_) => return Err(RagError::Configuration("RAGKIT_DIMENSION not set".into())),
    };
    let metric = match std::env::var("RAGKIT_METRIC") {
        Ok(v) => v.parse::<Metric>().map_err(RagError::Configuration)?,
        Err(_) => Metric::default(),
    };
    let config = VectorStoreConfig {
        api_key: std::env::var("RAGKIT_API_KEY").unwrap_or_default(),
        environment: std::env::var("RAGKIT_ENVIRONMENT").unwrap_or_default(),
        index_name: std::env::var("RAGKIT_INDEX").unwrap_or_else(|_| "ragkit".into()),
        dimension,
        metric,
    };
    config.validate()?;
    Ok(config)
}

fn generator_config_from_env() -> Result<GeneratorConfig, RagError> {
    let mut config = GeneratorConfig::new(std::env::var("RAGKIT_MODEL").unwrap_or_default());
    if let Ok(v) = std::env::var("RAGKIT_DEVICE") {
        config.device = v.parse::<Device>().map_err(RagError::Configuration)?;
    }
    if let Ok(v) = std::env::var("RAGKIT_MAX_TOKENS") {
        config.max_tokens = v
            .parse::<u32>()
            .map_err(|_| RagError::Configuration(format!("Invalid RAGKIT_MAX_TOKENS: {v}")))?;
    }
    if let Ok(v) = std::env::var("RAGKIT_TEMPERATURE") {
        config.temperature = v
            .parse::<f64>()
            .map_err(|_| RagError::Configuration(format!("Invalid RAGKIT_TEMPERATURE: {v}")))?;
    }
    Ok(config)
}
