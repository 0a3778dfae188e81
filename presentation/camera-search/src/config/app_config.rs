use anyhow::bail;
use catalog::config::CatalogConfig;
use dotenvy::dotenv;

use super::camera_config::CameraConfig;
use super::catalog_config;
use super::classifier_config::ClassifierConfig;
use super::env::{Lookup, process_env};
use super::session_config::SessionConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub camera: CameraConfig,
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads every setting from the environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> anyhow::Result<Self> {
        let config = Self {
            catalog: catalog_config::from_lookup(lookup),
            session: SessionConfig::from_lookup(lookup),
            camera: CameraConfig::from_lookup(lookup),
            classifier: ClassifierConfig::from_lookup(lookup),
        };

        if !catalog_config::is_valid_api_base(&config.catalog.api_base) {
            bail!(
                "CATALOG_API_BASE must be an http(s) URL, got '{}'",
                config.catalog.api_base
            );
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            session: SessionConfig::from_lookup(&|_: &str| None),
            camera: CameraConfig::from_lookup(&|_: &str| None),
            classifier: ClassifierConfig::from_lookup(&|_: &str| None),
        }
    }
}
