//! OpenAI-compatible generator behavior against a mock server.

use ragkit::domain::error::RagError;
use ragkit::domain::ports::generator::{Generator, GeneratorConfig};
use ragkit::infrastructure::generators::openai::OpenAiGenerator;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator(server: &MockServer) -> OpenAiGenerator {
    let mut config = GeneratorConfig::new("gpt-4o-mini");
    config.max_tokens = 64;
    config.temperature = 0.2;
    OpenAiGenerator::new(config, "test-key".to_string(), Some(server.uri())).unwrap()
}

#[tokio::test]
async fn sends_rendered_prompt_and_hyperparameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 64,
            "temperature": 0.2,
            "messages": [{
                "role": "user",
                "content": "France's capital is Paris.\n\nWhat is the capital of France?"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Paris."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = generator(&server)
        .generate(
            "What is the capital of France?",
            &["France's capital is Paris.".to_string()],
        )
        .await
        .unwrap();
    assert_eq!(answer, "Paris.");
}

#[tokio::test]
async fn api_failure_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = generator(&server).generate("Q?", &[]).await.unwrap_err();
    assert!(matches!(err, RagError::Generation(_)), "got {err:?}");
}

#[tokio::test]
async fn context_length_rejection_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": "context_length_exceeded"}
        })))
        .mount(&server)
        .await;

    let oversized = vec!["x".repeat(100_000); 10];
    let err = generator(&server).generate("Q?", &oversized).await.unwrap_err();
    assert!(matches!(err, RagError::Generation(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_choices_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = generator(&server).generate("Q?", &[]).await.unwrap_err();
    assert!(matches!(err, RagError::Generation(_)), "got {err:?}");
}
