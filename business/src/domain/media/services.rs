use async_trait::async_trait;

use super::errors::MediaError;
use super::model::{CapturedFrame, StreamConstraints, StreamId, Viewfinder};

/// Service port over the platform camera API.
///
/// `open_stream` may suspend indefinitely while the user answers the
/// permission prompt. `stop` must tolerate an already stopped stream.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn open_stream(&self, constraints: &StreamConstraints) -> Result<StreamId, MediaError>;

    fn attach(&self, stream: StreamId, viewfinder: &Viewfinder) -> Result<(), MediaError>;

    fn grab_frame(&self, stream: StreamId) -> Result<CapturedFrame, MediaError>;

    fn stop(&self, stream: StreamId);
}
