use async_trait::async_trait;

use super::errors::ClassifierError;
use super::model::{ModelOptions, RawPrediction};
use crate::domain::media::model::CapturedFrame;

/// A loaded classification model. Read-only once loaded.
#[async_trait]
pub trait ClassificationModel: Send + Sync {
    /// Returns up to `top_k` predictions for the frame. The frame is only
    /// borrowed for the duration of the call.
    async fn classify(
        &self,
        frame: &CapturedFrame,
        top_k: usize,
    ) -> Result<Vec<RawPrediction>, ClassifierError>;
}

/// Service port that loads the inference runtime and model weights.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(
        &self,
        options: &ModelOptions,
    ) -> Result<Box<dyn ClassificationModel>, ClassifierError>;
}
