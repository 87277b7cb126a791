//! Application Configuration
//!
//! Configuration for the experiment application layer.

use std::path::PathBuf;

use crate::domain::variant::VariantWeights;

/// Experiment configuration
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Experiment identifier
    pub test_id: String,
    /// Variant weights (50/50 by default)
    pub weights: VariantWeights,
    /// File holding persisted decisions
    pub store_path: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            test_id: "password-change-ui".to_string(),
            weights: VariantWeights::default(),
            store_path: PathBuf::from(".passform/variants.json"),
        }
    }
}

impl ExperimentConfig {
    /// Create config for development (store kept under the temp dir)
    pub fn development() -> Self {
        Self {
            store_path: std::env::temp_dir().join("passform-variants.json"),
            ..Default::default()
        }
    }

    /// Weights to pass to the assigner, `None` when both are defaulted
    pub fn weights(&self) -> Option<&VariantWeights> {
        if self.weights == VariantWeights::default() {
            None
        } else {
            Some(&self.weights)
        }
    }
}
