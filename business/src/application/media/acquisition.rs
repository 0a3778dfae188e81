use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{CapturedFrame, StreamConstraints, StreamId, Viewfinder};
use crate::domain::media::services::CameraDevice;

/// An open camera stream.
///
/// Owning the value means owning the hardware: `MediaAcquisition::release`
/// consumes it, and a stream dropped without being released is stopped by
/// `Drop`, so the device sees exactly one stop per stream.
pub struct CameraStream {
    id: StreamId,
    device: Arc<dyn CameraDevice>,
    attached_to: Option<Viewfinder>,
    stopped: bool,
}

impl CameraStream {
    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn viewfinder(&self) -> Option<&Viewfinder> {
        self.attached_to.as_ref()
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.device.stop(self.id);
        }
    }
}

impl std::fmt::Debug for CameraStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStream")
            .field("id", &self.id)
            .field("attached_to", &self.attached_to)
            .finish()
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Owns access to the camera: stream requests, preview binding and release.
pub struct MediaAcquisition {
    device: Arc<dyn CameraDevice>,
    constraints: StreamConstraints,
    logger: Arc<dyn Logger>,
}

impl MediaAcquisition {
    pub fn new(
        device: Arc<dyn CameraDevice>,
        constraints: StreamConstraints,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            device,
            constraints,
            logger,
        }
    }

    pub fn constraints(&self) -> &StreamConstraints {
        &self.constraints
    }

    /// Asks the platform for a video stream. Never retried here.
    pub async fn request_stream(&self) -> Result<CameraStream, MediaError> {
        self.logger.debug(&format!(
            "Requesting {} camera stream at {}x{}",
            self.constraints.facing, self.constraints.width, self.constraints.height
        ));

        match self.device.open_stream(&self.constraints).await {
            Ok(id) => {
                self.logger.info(&format!("Camera stream opened: {}", id));
                Ok(CameraStream {
                    id,
                    device: Arc::clone(&self.device),
                    attached_to: None,
                    stopped: false,
                })
            }
            Err(error) => {
                self.logger
                    .warn(&format!("Camera stream request failed: {}", error));
                Err(error)
            }
        }
    }

    /// Binds the stream to a preview surface. Attaching to the surface it is
    /// already bound to does nothing.
    pub fn attach(&self, stream: &mut CameraStream, viewfinder: &Viewfinder) -> Result<(), MediaError> {
        if stream.attached_to.as_ref() == Some(viewfinder) {
            return Ok(());
        }
        self.device.attach(stream.id, viewfinder)?;
        self.logger.debug(&format!(
            "Attached {} to viewfinder {}",
            stream.id,
            viewfinder.as_str()
        ));
        stream.attached_to = Some(viewfinder.clone());
        Ok(())
    }

    pub fn grab_frame(&self, stream: &CameraStream) -> Result<CapturedFrame, MediaError> {
        let frame = self.device.grab_frame(stream.id)?;
        self.logger.debug(&format!(
            "Captured frame {} ({}x{}) from {}",
            frame.id, frame.width, frame.height, stream.id
        ));
        Ok(frame)
    }

    /// Stops every track of the stream.
    pub fn release(&self, mut stream: CameraStream) {
        stream.stop();
        self.logger
            .info(&format!("Camera stream released: {}", stream.id));
    }

    /// Same as `release`, accepting an absent stream.
    pub fn release_opt(&self, stream: Option<CameraStream>) {
        if let Some(stream) = stream {
            self.release(stream);
        }
    }
}
