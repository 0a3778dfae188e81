use crate::domain::classifier::errors::ClassifierError;
use crate::domain::media::errors::MediaError;

/// Failures that put a camera search session into its error state.
///
/// Catalog search failures are not listed: they degrade to an empty result
/// list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session.permission_denied")]
    PermissionDenied,
    #[error("session.no_device")]
    NoDevice,
    #[error("session.stream_acquisition_failed")]
    StreamAcquisitionFailed,
    #[error("session.model_load_failed")]
    ModelLoadFailed,
    #[error("session.no_recognizable_object")]
    NoRecognizableObject,
    #[error("session.classification_failed")]
    ClassificationFailed,
}

impl SessionError {
    /// Plain-language text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            SessionError::PermissionDenied => {
                "Camera access was denied. Allow camera access and try again."
            }
            SessionError::NoDevice => "No camera was found on this device.",
            SessionError::StreamAcquisitionFailed => {
                "The camera could not be started. Please try again."
            }
            SessionError::ModelLoadFailed => {
                "Could not load the recognition model. Check your connection and try again."
            }
            SessionError::NoRecognizableObject => {
                "No product was recognized. Try a different angle or get closer."
            }
            SessionError::ClassificationFailed => "An error occurred while analyzing the image.",
        }
    }
}

impl From<MediaError> for SessionError {
    fn from(error: MediaError) -> Self {
        match error {
            MediaError::PermissionDenied => SessionError::PermissionDenied,
            MediaError::NoDevice => SessionError::NoDevice,
            MediaError::Unknown(_) => SessionError::StreamAcquisitionFailed,
        }
    }
}

impl From<ClassifierError> for SessionError {
    fn from(error: ClassifierError) -> Self {
        match error {
            ClassifierError::ModelLoadFailed(_) => SessionError::ModelLoadFailed,
            ClassifierError::ClassificationFailed(_) => SessionError::ClassificationFailed,
        }
    }
}
