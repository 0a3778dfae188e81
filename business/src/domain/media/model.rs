use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which camera the stream should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Rear camera, pointed at the scene.
    Environment,
    /// Front camera, pointed at the user.
    User,
}

impl std::fmt::Display for FacingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacingMode::Environment => write!(f, "environment"),
            FacingMode::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for FacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "environment" => Ok(FacingMode::Environment),
            "user" => Ok(FacingMode::User),
            _ => Err(format!("Invalid facing mode: {}", s)),
        }
    }
}

/// Hints passed to the platform when requesting a video stream.
///
/// Width and height are ideal values, the platform may pick the closest
/// supported resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConstraints {
    pub facing: FacingMode,
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            facing: FacingMode::Environment,
            width: 640,
            height: 480,
            audio: false,
        }
    }
}

/// Platform identifier of an open video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(pub u64);

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stream#{}", self.0)
    }
}

/// Handle to the render surface the live preview is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Viewfinder(String);

impl Viewfinder {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Still image taken from the live stream at capture time.
///
/// The pixel data is shared, cloning a frame does not copy the image.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    pub id: Uuid,
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub data: Arc<[u8]>,
    pub captured_at: DateTime<Utc>,
}

impl CapturedFrame {
    pub fn new(width: u32, height: u32, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            width,
            height,
            mime_type: mime_type.into(),
            data: Arc::from(data),
            captured_at: Utc::now(),
        }
    }

    /// Encodes the frame as a `data:` URL for re-display.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}
