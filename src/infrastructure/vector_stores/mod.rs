pub mod memory;
pub mod pinecone;
