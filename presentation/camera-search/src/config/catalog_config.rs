use catalog::config::{CatalogConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

use super::env::{Lookup, parse_or, process_env, string_or};

/// Load catalog access settings from environment variables
///
/// Environment variables:
/// - CATALOG_API_BASE: Catalog API origin (default: "http://localhost:5000")
/// - CATALOG_TIMEOUT_SECS: Request timeout in seconds (default: 10)
pub fn from_env() -> CatalogConfig {
    from_lookup(&process_env)
}

pub fn from_lookup(lookup: Lookup<'_>) -> CatalogConfig {
    CatalogConfig {
        api_base: string_or(lookup, "CATALOG_API_BASE", DEFAULT_API_BASE),
        timeout_secs: parse_or(lookup, "CATALOG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS, |s| *s > 0),
    }
}

/// Whether the catalog origin is an absolute http(s) URL.
pub fn is_valid_api_base(api_base: &str) -> bool {
    let rest = api_base
        .strip_prefix("https://")
        .or_else(|| api_base.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}
