use business::domain::classifier::model::ModelOptions;

use super::env::{Lookup, parse_or, process_env};

/// Model variant handed to the platform loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub version: u8,
    pub alpha: f32,
}

impl ClassifierConfig {
    /// Load classifier configuration from environment variables
    ///
    /// Environment variables:
    /// - CLASSIFIER_MODEL_VERSION: Model generation (default: 2)
    /// - CLASSIFIER_MODEL_ALPHA: Width multiplier (default: 1.0)
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = ModelOptions::default();
        Self {
            version: parse_or(lookup, "CLASSIFIER_MODEL_VERSION", defaults.version, |v| *v > 0),
            alpha: parse_or(lookup, "CLASSIFIER_MODEL_ALPHA", defaults.alpha, |a| {
                a.is_finite() && *a > 0.0
            }),
        }
    }

    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            version: self.version,
            alpha: self.alpha,
        }
    }
}
