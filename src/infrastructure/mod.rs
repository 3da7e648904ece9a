pub mod generators;
pub mod vector_stores;
