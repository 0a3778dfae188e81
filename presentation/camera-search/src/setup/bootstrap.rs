use std::sync::Arc;

use business::domain::classifier::services::ModelLoader;
use business::domain::media::services::CameraDevice;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::SessionFactory;

/// Start-up sequence for an embedding host.
///
/// Installs tracing, loads configuration and wires the session factory
/// around the platform's camera and model loader.
pub fn bootstrap(
    camera: Arc<dyn CameraDevice>,
    loader: Arc<dyn ModelLoader>,
) -> anyhow::Result<SessionFactory> {
    // 1. Initialize tracing with RUST_LOG env filter
    logger::init_tracing();

    // 2. Load configuration (.env first, then the environment)
    let config = AppConfig::load()?;

    // 3. Wire dependencies
    SessionFactory::new(&config, camera, loader)
}
