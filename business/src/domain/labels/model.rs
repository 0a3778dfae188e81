use serde::{Deserialize, Serialize};

/// A classifier label that mapped onto the commerce vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedCategory {
    pub display_label: String,
    pub search_term: String,
    pub confidence_percent: u8,
}

/// Converts a `0.0..=1.0` confidence into a rounded percentage.
pub fn confidence_percent(confidence: f32) -> u8 {
    if confidence.is_nan() {
        return 0;
    }
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}
