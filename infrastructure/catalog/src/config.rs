use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the storefront catalog lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
