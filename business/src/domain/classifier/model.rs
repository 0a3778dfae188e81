use serde::{Deserialize, Serialize};

/// Number of candidates kept per classification.
pub const DEFAULT_TOP_K: usize = 5;

/// Options handed to the model loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    pub version: u8,
    pub alpha: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            version: 2,
            alpha: 1.0,
        }
    }
}

/// Prediction in the shape the model runtime reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrediction {
    pub class_name: String,
    pub probability: f32,
}

/// A label proposed by the classifier with its confidence in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationCandidate {
    pub raw_label: String,
    pub confidence: f32,
}

impl ClassificationCandidate {
    pub fn new(raw_label: impl Into<String>, confidence: f32) -> Self {
        Self {
            raw_label: raw_label.into(),
            confidence,
        }
    }
}

impl From<RawPrediction> for ClassificationCandidate {
    fn from(prediction: RawPrediction) -> Self {
        let confidence = if prediction.probability.is_nan() {
            0.0
        } else {
            prediction.probability.clamp(0.0, 1.0)
        };
        Self {
            raw_label: prediction.class_name,
            confidence,
        }
    }
}
