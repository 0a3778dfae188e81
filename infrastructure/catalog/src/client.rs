use anyhow::Context;
use reqwest::Client;

use crate::config::CatalogConfig;

/// Shared HTTP client for the catalog API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("failed to build catalog HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}
