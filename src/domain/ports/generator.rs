use crate::domain::error::RagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Execution target for local model runtimes. Hosted backends ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Gpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Gpu => write!(f, "gpu"),
        }
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "gpu" | "cuda" => Ok(Device::Gpu),
            _ => Err(format!("Unknown device: {s}")),
        }
    }
}

/// Model identifier plus generation hyperparameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub model: String,
    pub device: Device,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            device: Device::Cpu,
            max_tokens: 128,
            temperature: 0.7,
        }
    }
}

impl GeneratorConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// A text-generation backend. One call, one answer; retry policy, if any,
/// belongs to the caller.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Produce text conditioned on `query` and the ordered `context` strings.
    /// Output length is bounded by the configured `max_tokens`.
    async fn generate(&self, query: &str, context: &[String]) -> Result<String, RagError>;
}
