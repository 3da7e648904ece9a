use crate::domain::error::RagError;
use crate::domain::ports::generator::Generator;
use std::sync::Arc;

pub struct AnswerUseCase {
    generator: Arc<dyn Generator>,
}

impl AnswerUseCase {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    pub async fn execute(&self, query: &str, context: &[String]) -> Result<String, RagError> {
        self.generator.generate(query, context).await
    }
}
