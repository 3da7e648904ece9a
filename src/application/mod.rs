pub mod answer;
pub mod ingest;
pub mod retrieve;
