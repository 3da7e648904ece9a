use crate::domain::entities::document::{Document, SearchResult};
use crate::domain::error::RagError;
use crate::domain::ports::vector_store::{VectorStore, VectorStoreConfig};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Adapter for the environment-scoped Pinecone REST API. The index is
/// created on connect when it does not already exist, with the configured
/// dimension and metric.
#[derive(Debug)]
pub struct PineconeStore {
    client: Client,
    api_key: String,
    index_url: String,
    dimension: usize,
}

#[derive(Deserialize)]
struct WhoamiResponse {
    project_name: String,
}

#[derive(Serialize)]
struct CreateIndexRequest {
    name: String,
    dimension: usize,
    metric: String,
}

#[derive(Serialize)]
struct UpsertRequest {
    vectors: Vec<UpsertVector>,
}

#[derive(Serialize)]
struct UpsertVector {
    id: String,
    values: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct QueryRequest {
    vector: Vec<f32>,
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeValues")]
    include_values: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    id: String,
    score: f64,
}

impl PineconeStore {
    /// Connect to the service, creating the index when absent. `base_url`
    /// overrides both the controller and data-plane hosts (tests, proxies);
    /// when `None` the public Pinecone endpoints are used.
    pub async fn connect(
        config: VectorStoreConfig,
        base_url: Option<String>,
    ) -> Result<Self, RagError> {
        config.validate()?;
        if config.api_key.is_empty() {
            return Err(RagError::Configuration(
                "api_key must not be empty".to_string(),
            ));
        }
        if config.environment.is_empty() && base_url.is_none() {
            return Err(RagError::Configuration(
                "environment must not be empty".to_string(),
            ));
        }

        let client = Client::new();
        let controller_url = base_url.clone().unwrap_or_else(|| {
            format!("https://controller.{}.pinecone.io", config.environment)
        });

        let resp = client
            .get(format!("{controller_url}/actions/whoami"))
            .header("Api-Key", &config.api_key)
            .send()
            .await
            .map_err(|e| RagError::Connection(format!("Pinecone controller error: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Connection(format!("Pinecone auth {status}: {body}")));
        }
        let whoami: WhoamiResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))?;

        let existing = Self::list_indexes(&client, &controller_url, &config.api_key).await?;
        if !existing.iter().any(|name| name == &config.index_name) {
            debug!(index = %config.index_name, dimension = config.dimension, "creating index");
            let resp = client
                .post(format!("{controller_url}/databases"))
                .header("Api-Key", &config.api_key)
                .json(&CreateIndexRequest {
                    name: config.index_name.clone(),
                    dimension: config.dimension,
                    metric: config.metric.to_string(),
                })
                .send()
                .await
                .map_err(|e| RagError::Connection(format!("Pinecone controller error: {e}")))?;
            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(RagError::Backend(format!(
                    "Pinecone create index {status}: {body}"
                )));
            }
        }

        let index_url = match base_url {
            Some(url) => url,
            None => format!(
                "https://{}-{}.svc.{}.pinecone.io",
                config.index_name, whoami.project_name, config.environment
            ),
        };

        Ok(Self {
            client,
            api_key: config.api_key,
            index_url,
            dimension: config.dimension,
        })
    }

    async fn list_indexes(
        client: &Client,
        controller_url: &str,
        api_key: &str,
    ) -> Result<Vec<String>, RagError> {
        let resp = client
            .get(format!("{controller_url}/databases"))
            .header("Api-Key", api_key)
            .send()
            .await
            .map_err(|e| RagError::Connection(format!("Pinecone controller error: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Connection(format!(
                "Pinecone list indexes {status}: {body}"
            )));
        }
        resp.json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))
    }
}

#[async_trait::async_trait]
impl VectorStore for PineconeStore {
    async fn upsert(&self, documents: &[Document]) -> Result<(), RagError> {
        let vectors = documents
            .iter()
            .map(|d| UpsertVector {
                id: d.id.to_string(),
                values: d.values.clone(),
                metadata: d.metadata.clone(),
            })
            .collect();

        let resp = self
            .client
            .post(format!("{}/vectors/upsert", self.index_url))
            .header("Api-Key", &self.api_key)
            .json(&UpsertRequest { vectors })
            .send()
            .await
            .map_err(|e| RagError::Backend(format!("Pinecone upsert error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Backend(format!("Pinecone upsert {status}: {body}")));
        }
        debug!(count = documents.len(), "upserted vectors");
        Ok(())
    }

    async fn search(&self, query_vector: &[f32], top_k: usize) -> Result<SearchResult, RagError> {
        if top_k == 0 {
            return Err(RagError::Configuration("top_k must be >= 1".to_string()));
        }

        let resp = self
            .client
            .post(format!("{}/query", self.index_url))
            .header("Api-Key", &self.api_key)
            .json(&QueryRequest {
                vector: query_vector.to_vec(),
                top_k,
                include_values: false,
            })
            .send()
            .await
            .map_err(|e| RagError::Backend(format!("Pinecone query error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Backend(format!("Pinecone query {status}: {body}")));
        }

        let result: QueryResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))?;

        let mut distances = Vec::with_capacity(result.matches.len());
        let mut ids = Vec::with_capacity(result.matches.len());
        for m in result.matches {
            let id = m
                .id
                .parse::<i64>()
                .map_err(|_| RagError::Parse(format!("Non-integer match id: {}", m.id)))?;
            distances.push(m.score);
            ids.push(id);
        }
        Ok(SearchResult { distances, ids })
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
