use mapping::Platform;
use serde::{Deserialize, Serialize};

/// A ranked category, copied out of the mapping at prediction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdCategory {
    pub id: String,
    pub name: String,
    pub probability: f64,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdPrediction {
    pub platform: Platform,
    /// Highest probability first, at most `top_n` entries.
    pub categories: Vec<AdCategory>,
    pub confidence: f64,
    pub reasoning: Vec<String>,
}

impl AdPrediction {
    pub fn top_category(&self) -> Option<&AdCategory> {
        self.categories.first()
    }
}
