//! Camera search wiring for an embedding UI.
//!
//! The host platform provides the camera and the classification model
//! (`CameraDevice`, `ModelLoader`); this crate loads configuration, builds
//! sessions around them and turns session snapshots into view models.
//!
//! - config/: Application configuration (catalog, session, camera, classifier)
//! - setup/: Start-up sequence and dependency injection
//! - view: Render-ready projection of a session snapshot

pub mod config {
    pub mod app_config;
    pub mod camera_config;
    pub mod catalog_config;
    pub mod classifier_config;
    mod env;
    pub mod session_config;
}

pub mod setup {
    pub mod bootstrap;
    pub mod dependency_injection;
}

pub mod view;

#[cfg(test)]
mod test_support;

pub use config::app_config::AppConfig;
pub use setup::bootstrap::bootstrap;
pub use setup::dependency_injection::SessionFactory;
pub use view::SessionView;
