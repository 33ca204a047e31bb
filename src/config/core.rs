use super::scoring::ComparisonWeights;
use super::thresholds::ComparisonThresholds;
use serde::{Deserialize, Serialize};

/// Root of `.carecompare.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub thresholds: ComparisonThresholds,

    #[serde(default)]
    pub weights: ComparisonWeights,
}

impl ComparisonConfig {
    pub fn with_weights(mut self, weights: ComparisonWeights) -> Self {
        self.weights = weights;
        self
    }
}
