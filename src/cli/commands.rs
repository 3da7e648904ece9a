use crate::domain::ports::vector_store::DEFAULT_TOP_K;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ragkit", about = "Vector retrieval and text generation for RAG pipelines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upsert documents into the configured vector store
    Ingest {
        /// JSON array of {id, values, metadata?} documents
        json: String,
    },
    /// Search nearest neighbors for a query vector
    Search {
        /// JSON array of floats, length matching the index dimension
        vector: String,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Answer a query, optionally retrieving context for it first
    Ask {
        query: String,
        /// Query vector (JSON array of floats); when given, retrieved
        /// documents become generation context
        #[arg(long)]
        vector: Option<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        /// Context strings passed straight to the generator
        #[arg(long)]
        context: Vec<String>,
    },
}
