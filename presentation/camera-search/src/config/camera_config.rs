use business::domain::media::model::{FacingMode, StreamConstraints};

use super::env::{Lookup, parse_or, process_env};

/// Camera stream preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub facing: FacingMode,
}

impl CameraConfig {
    /// Load camera configuration from environment variables
    ///
    /// Environment variables:
    /// - CAMERA_WIDTH: Ideal frame width (default: 640)
    /// - CAMERA_HEIGHT: Ideal frame height (default: 480)
    /// - CAMERA_FACING: "environment" or "user" (default: "environment")
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = StreamConstraints::default();
        Self {
            width: parse_or(lookup, "CAMERA_WIDTH", defaults.width, |w| *w > 0),
            height: parse_or(lookup, "CAMERA_HEIGHT", defaults.height, |h| *h > 0),
            facing: parse_or(lookup, "CAMERA_FACING", defaults.facing, |_| true),
        }
    }

    /// Video only; audio is never requested.
    pub fn constraints(&self) -> StreamConstraints {
        StreamConstraints {
            facing: self.facing,
            width: self.width,
            height: self.height,
            audio: false,
        }
    }
}
