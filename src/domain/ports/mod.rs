pub mod generator;
pub mod vector_store;
