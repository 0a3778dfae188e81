/// Camera acquisition errors.
///
/// Permission refusal and missing hardware are kept apart from generic
/// failures so each can be reported with its own message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("media.permission_denied")]
    PermissionDenied,
    #[error("media.no_device")]
    NoDevice,
    #[error("media.unknown: {0}")]
    Unknown(String),
}

impl MediaError {
    pub fn permission_denied() -> Self {
        MediaError::PermissionDenied
    }
    pub fn no_device() -> Self {
        MediaError::NoDevice
    }
    pub fn unknown(reason: impl Into<String>) -> Self {
        MediaError::Unknown(reason.into())
    }
}
