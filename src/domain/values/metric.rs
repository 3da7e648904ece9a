use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity metric used when creating and querying an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cosine,
    Euclidean,
    DotProduct,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::DotProduct => write!(f, "dotproduct"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            "dotproduct" => Ok(Metric::DotProduct),
            _ => Err(format!("Unsupported metric: {s}")),
        }
    }
}
