/// How retrieved context strings are folded into the prompt handed to a
/// generation backend. Each context item is rendered on its own line (with an
/// optional prefix), followed by the query.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Line emitted before any context, e.g. an instruction. Skipped when
    /// there is no context.
    pub header: Option<String>,
    /// Prepended to each context line ("- ", "Context: ", ...).
    pub context_prefix: String,
    /// Separator between the context block and the query.
    pub separator: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            header: None,
            context_prefix: String::new(),
            separator: "\n".to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn render(&self, query: &str, context: &[String]) -> String {
        if context.is_empty() {
            return query.to_string();
        }
        let mut prompt = String::new();
        if let Some(header) = &self.header {
            prompt.push_str(header);
            prompt.push('\n');
        }
        for item in context {
            prompt.push_str(&self.context_prefix);
            prompt.push_str(item);
            prompt.push('\n');
        }
        prompt.push_str(&self.separator);
        prompt.push_str(query);
        prompt
    }
}
