use crate::domain::error::RagError;
use crate::domain::ports::generator::Generator;
use crate::domain::values::prompt_template::PromptTemplate;

/// Offline generator returning fixed replies keyed by prompt substring.
/// First matching rule wins; the fallback covers everything else. Useful for
/// tests and for wiring a pipeline without any model behind it.
pub struct CannedGenerator {
    rules: Vec<(String, String)>,
    fallback: String,
    template: PromptTemplate,
}

impl CannedGenerator {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
            template: PromptTemplate::default(),
        }
    }

    pub fn with_rule(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push((needle.into(), reply.into()));
        self
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }
}

#[async_trait::async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, query: &str, context: &[String]) -> Result<String, RagError> {
        let prompt = self.template.render(query, context);
        for (needle, reply) in &self.rules {
            if prompt.contains(needle.as_str()) {
                return Ok(reply.clone());
            }
        }
        Ok(self.fallback.clone())
    }
}
