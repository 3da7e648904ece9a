use crate::domain::error::RagError;
use crate::domain::ports::generator::{Device, Generator, GeneratorConfig};
use crate::domain::values::prompt_template::PromptTemplate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Local-runtime generator backed by an Ollama server. `connect` verifies the
/// configured model is actually present before handing out a usable adapter.
#[derive(Debug)]
pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    config: GeneratorConfig,
    template: PromptTemplate,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_gpu: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaGenerator {
    /// Connect to an Ollama server, default `http://localhost:11434`
    /// (`RAGKIT_OLLAMA_URL` overrides). Fails when the server is unreachable
    /// or the model has not been pulled.
    pub async fn connect(
        config: GeneratorConfig,
        base_url: Option<String>,
    ) -> Result<Self, RagError> {
        if config.model.is_empty() {
            return Err(RagError::ModelLoad("Model name not set".to_string()));
        }
        let base_url = base_url
            .or_else(|| std::env::var("RAGKIT_OLLAMA_URL").ok())
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        let client = Client::new();
        let resp = client
            .get(format!("{base_url}/api/tags"))
            .send()
            .await
            .map_err(|e| RagError::ModelLoad(format!("Ollama unreachable: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            return Err(RagError::ModelLoad(format!("Ollama tags {status}")));
        }
        let tags: TagsResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))?;

        // "llama3.1" matches "llama3.1:latest".
        let present = tags.models.iter().any(|m| {
            m.name == config.model || m.name.split(':').next() == Some(config.model.as_str())
        });
        if !present {
            return Err(RagError::ModelLoad(format!(
                "Model not found on Ollama server: {}",
                config.model
            )));
        }

        Ok(Self {
            client,
            base_url,
            config,
            template: PromptTemplate::default(),
        })
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }
}

#[async_trait::async_trait]
impl Generator for OllamaGenerator {
    async fn generate(&self, query: &str, context: &[String]) -> Result<String, RagError> {
        let prompt = self.template.render(query, context);
        debug!(model = %self.config.model, prompt_len = prompt.len(), "ollama generate");

        let num_gpu = match self.config.device {
            Device::Cpu => Some(0),
            Device::Gpu => None,
        };

        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: self.config.model.clone(),
                prompt,
                stream: false,
                options: GenerateOptions {
                    temperature: self.config.temperature,
                    num_predict: self.config.max_tokens,
                    num_gpu,
                },
            })
            .send()
            .await
            .map_err(|e| RagError::Generation(format!("Ollama API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Generation(format!("Ollama API {status}: {body}")));
        }

        let result: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))?;
        Ok(result.response)
    }
}
