pub mod canned;
pub mod ollama;
pub mod openai;
