pub mod metric;
pub mod prompt_template;
