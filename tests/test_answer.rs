//! Generation and full retrieve-then-generate pipeline behavior.

mod common;

use common::{make_text_doc, setup};
use ragkit::domain::values::prompt_template::PromptTemplate;
use ragkit::infrastructure::generators::canned::CannedGenerator;
use ragkit::domain::ports::generator::Generator;

#[tokio::test]
async fn generate_with_context_returns_non_empty_answer() {
    let rag = setup();
    let answer = rag
        .generate(
            "What is the capital of France?",
            &["France's capital is Paris.".to_string()],
        )
        .await
        .unwrap();
    assert!(!answer.is_empty());
    assert!(answer.contains("Paris"));
}

#[tokio::test]
async fn answer_retrieves_context_then_generates() {
    let rag = setup();
    rag.ingest(&[
        make_text_doc(1, vec![1.0, 0.0, 0.0], "France's capital is Paris."),
        make_text_doc(2, vec![0.0, 1.0, 0.0], "Berlin is the capital of Germany."),
    ])
    .await
    .unwrap();

    let answer = rag
        .answer("What is the capital of France?", &[1.0, 0.0, 0.0], 1)
        .await
        .unwrap();
    assert!(answer.contains("Paris"));
}

#[tokio::test]
async fn unmatched_prompt_falls_back() {
    let rag = setup();
    let answer = rag.generate("What color is the sky?", &[]).await.unwrap();
    assert_eq!(answer, "I don't know.");
}

#[tokio::test]
async fn ids_without_registered_text_are_skipped() {
    let rag = setup();
    // Document 2 carries no text metadata, so retrieval of it contributes no
    // context and generation still succeeds.
    rag.ingest(&[
        make_text_doc(1, vec![1.0, 0.0, 0.0], "France's capital is Paris."),
        common::make_doc(2, vec![0.9, 0.1, 0.0]),
    ])
    .await
    .unwrap();

    let answer = rag
        .answer("What is the capital of France?", &[1.0, 0.0, 0.0], 2)
        .await
        .unwrap();
    assert!(answer.contains("Paris"));
}

#[test]
fn default_template_puts_each_context_line_before_query() {
    let template = PromptTemplate::default();
    let rendered = template.render(
        "Q?",
        &["first fact".to_string(), "second fact".to_string()],
    );
    assert_eq!(rendered, "first fact\nsecond fact\n\nQ?");
}

#[test]
fn template_without_context_is_just_the_query() {
    let template = PromptTemplate::default();
    assert_eq!(template.render("Q?", &[]), "Q?");
}

#[test]
fn template_header_and_prefix_are_configurable() {
    let template = PromptTemplate {
        header: Some("Use the following context:".to_string()),
        context_prefix: "- ".to_string(),
        separator: "\nQuestion: ".to_string(),
    };
    let rendered = template.render("Q?", &["fact".to_string()]);
    assert_eq!(rendered, "Use the following context:\n- fact\n\nQuestion: Q?");
}

#[tokio::test]
async fn canned_rules_match_against_rendered_prompt() {
    // The needle lives in the context, not the query.
    let generator = CannedGenerator::new("fallback").with_rule("Paris", "It is Paris.");
    let reply = generator
        .generate("capital?", &["France's capital is Paris.".to_string()])
        .await
        .unwrap();
    assert_eq!(reply, "It is Paris.");
}
