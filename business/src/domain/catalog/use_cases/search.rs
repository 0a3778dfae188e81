use async_trait::async_trait;

use crate::domain::catalog::model::SearchOutcome;

pub struct SearchCatalogParams {
    pub term: String,
    pub limit: usize,
}

/// Searches the catalog, never failing: errors degrade to an empty outcome.
#[async_trait]
pub trait SearchCatalogUseCase: Send + Sync {
    async fn execute(&self, params: SearchCatalogParams) -> SearchOutcome;
}
