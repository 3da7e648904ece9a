use crate::domain::error::RagError;
use crate::domain::ports::generator::{Generator, GeneratorConfig};
use crate::domain::values::prompt_template::PromptTemplate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hosted-API generator speaking the OpenAI chat-completions protocol. Also
/// covers compatible services (Groq, Mistral) via the base URL override.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    config: GeneratorConfig,
    template: PromptTemplate,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OpenAiGenerator {
    pub fn new(
        config: GeneratorConfig,
        api_key: String,
        base_url: Option<String>,
    ) -> Result<Self, RagError> {
        if api_key.is_empty() {
            return Err(RagError::ModelLoad("API key not set".to_string()));
        }
        if config.model.is_empty() {
            return Err(RagError::ModelLoad("Model name not set".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
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
impl Generator for OpenAiGenerator {
    async fn generate(&self, query: &str, context: &[String]) -> Result<String, RagError> {
        let prompt = self.template.render(query, context);
        debug!(model = %self.config.model, prompt_len = prompt.len(), "chat completion");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: self.config.model.clone(),
                messages: vec![ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                }],
                max_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
            })
            .send()
            .await
            .map_err(|e| RagError::Generation(format!("OpenAI API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RagError::Generation(format!("OpenAI API {status}: {body}")));
        }

        let result: ChatResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Parse(format!("Parse error: {e}")))?;
        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Generation("Empty choices in response".to_string()))?;
        Ok(choice.message.content)
    }
}
