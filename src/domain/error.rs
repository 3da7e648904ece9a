use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<String> for RagError {
    fn from(s: String) -> Self {
        RagError::Backend(s)
    }
}

impl From<&str> for RagError {
    fn from(s: &str) -> Self {
        RagError::Configuration(s.to_string())
    }
}
