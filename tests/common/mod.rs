//! Shared test helpers.

use ragkit::domain::entities::document::Document;
use ragkit::domain::values::metric::Metric;
use ragkit::infrastructure::generators::canned::CannedGenerator;
use ragkit::infrastructure::vector_stores::memory::InMemoryStore;
use ragkit::Rag;
use std::sync::Arc;

/// Pipeline over a 3-dimensional in-memory cosine index and a canned
/// generator that knows one fact.
#[allow(dead_code)]
pub fn setup() -> Rag {
    let store = InMemoryStore::new(3, Metric::Cosine).unwrap();
    let generator = CannedGenerator::new("I don't know.")
        .with_rule("France's capital is Paris", "The capital of France is Paris.");
    Rag::with_backends(Arc::new(store), Arc::new(generator))
}

#[allow(dead_code)]
pub fn make_doc(id: i64, values: Vec<f32>) -> Document {
    Document::new(id, values)
}

#[allow(dead_code)]
pub fn make_text_doc(id: i64, values: Vec<f32>, text: &str) -> Document {
    Document::with_metadata(id, values, serde_json::json!({ "text": text }))
}
