use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::classifier::errors::ClassifierError;
use crate::domain::classifier::model::{ClassificationCandidate, ModelOptions};
use crate::domain::classifier::services::{ClassificationModel, ModelLoader};
use crate::domain::logger::Logger;
use crate::domain::media::model::CapturedFrame;

/// Lazily loads the classification model and keeps it for the process lifetime.
///
/// One gateway is shared by all sessions. Concurrent `ensure_loaded` calls
/// wait on the same load; a failed load leaves the gateway empty so the next
/// call tries again.
pub struct ClassifierGateway {
    loader: Arc<dyn ModelLoader>,
    options: ModelOptions,
    model: OnceCell<Arc<dyn ClassificationModel>>,
    logger: Arc<dyn Logger>,
}

impl ClassifierGateway {
    pub fn new(loader: Arc<dyn ModelLoader>, options: ModelOptions, logger: Arc<dyn Logger>) -> Self {
        Self {
            loader,
            options,
            model: OnceCell::new(),
            logger,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    pub async fn ensure_loaded(&self) -> Result<(), ClassifierError> {
        self.model().await.map(|_| ())
    }

    async fn model(&self) -> Result<&Arc<dyn ClassificationModel>, ClassifierError> {
        self.model
            .get_or_try_init(|| async {
                self.logger.info(&format!(
                    "Loading classification model v{} (alpha {})",
                    self.options.version, self.options.alpha
                ));
                match self.loader.load(&self.options).await {
                    Ok(model) => {
                        self.logger.info("Classification model loaded");
                        Ok(Arc::from(model))
                    }
                    Err(error) => {
                        self.logger
                            .error(&format!("Classification model failed to load: {}", error));
                        Err(match error {
                            ClassifierError::ModelLoadFailed(_) => error,
                            other => ClassifierError::model_load_failed(other.to_string()),
                        })
                    }
                }
            })
            .await
    }

    /// Classifies a frame, loading the model first if needed.
    ///
    /// Candidates come back sorted by descending confidence and cut to `top_k`.
    /// An empty list means nothing was recognized; inference failures are
    /// reported as `ClassificationFailed`.
    pub async fn classify(
        &self,
        frame: &CapturedFrame,
        top_k: usize,
    ) -> Result<Vec<ClassificationCandidate>, ClassifierError> {
        let model = Arc::clone(self.model().await?);

        let predictions = model.classify(frame, top_k).await.map_err(|error| {
            self.logger
                .error(&format!("Classification of frame {} failed: {}", frame.id, error));
            match error {
                ClassifierError::ClassificationFailed(_) => error,
                other => ClassifierError::classification_failed(other.to_string()),
            }
        })?;

        let mut candidates: Vec<ClassificationCandidate> =
            predictions.into_iter().map(ClassificationCandidate::from).collect();
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates.truncate(top_k);

        self.logger.debug(&format!(
            "Frame {} classified: {:?}",
            frame.id,
            candidates
                .iter()
                .map(|c| (c.raw_label.as_str(), c.confidence))
                .collect::<Vec<_>>()
        ));

        Ok(candidates)
    }
}
