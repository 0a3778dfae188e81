#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier.model_load_failed: {0}")]
    ModelLoadFailed(String),
    #[error("classifier.classification_failed: {0}")]
    ClassificationFailed(String),
}

impl ClassifierError {
    pub fn model_load_failed(reason: impl Into<String>) -> Self {
        ClassifierError::ModelLoadFailed(reason.into())
    }
    pub fn classification_failed(reason: impl Into<String>) -> Self {
        ClassifierError::ClassificationFailed(reason.into())
    }
}
