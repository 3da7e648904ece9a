//! Ollama adapter: model presence check on connect, native generate call.

use ragkit::domain::error::RagError;
use ragkit::domain::ports::generator::{Device, Generator, GeneratorConfig};
use ragkit::infrastructure::generators::ollama::OllamaGenerator;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_tags(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "llama3.2:3b"}, {"name": "mistral:latest"}]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn connect_verifies_model_presence() {
    let server = MockServer::start().await;
    mock_tags(&server).await;

    OllamaGenerator::connect(GeneratorConfig::new("llama3.2:3b"), Some(server.uri()))
        .await
        .unwrap();

    // Bare name matches a tagged model.
    OllamaGenerator::connect(GeneratorConfig::new("mistral"), Some(server.uri()))
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_model_is_a_model_load_error() {
    let server = MockServer::start().await;
    mock_tags(&server).await;

    let err = OllamaGenerator::connect(GeneratorConfig::new("phi3"), Some(server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::ModelLoad(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_model_load_error() {
    let err = OllamaGenerator::connect(
        GeneratorConfig::new("llama3.2:3b"),
        Some("http://127.0.0.1:1".to_string()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RagError::ModelLoad(_)), "got {err:?}");
}

#[tokio::test]
async fn cpu_device_pins_num_gpu_to_zero() {
    let server = MockServer::start().await;
    mock_tags(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "llama3.2:3b",
            "stream": false,
            "options": {"num_predict": 128, "num_gpu": 0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "The sky is blue."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = GeneratorConfig::new("llama3.2:3b");
    config.device = Device::Cpu;
    let generator = OllamaGenerator::connect(config, Some(server.uri())).await.unwrap();
    let answer = generator.generate("What color is the sky?", &[]).await.unwrap();
    assert_eq!(answer, "The sky is blue.");
}

#[tokio::test]
async fn runtime_failure_is_a_generation_error() {
    let server = MockServer::start().await;
    mock_tags(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;

    let generator = OllamaGenerator::connect(GeneratorConfig::new("llama3.2:3b"), Some(server.uri()))
        .await
        .unwrap();
    let err = generator.generate("Q?", &[]).await.unwrap_err();
    assert!(matches!(err, RagError::Generation(_)), "got {err:?}");
}
