use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Service port for querying the product catalog by free-text term.
///
/// Implementations issue exactly one request per call and do not cache.
#[async_trait]
pub trait CatalogSearchService: Send + Sync {
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Product>, CatalogError>;
}
