use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::SearchOutcome;
use crate::domain::catalog::services::CatalogSearchService;
use crate::domain::catalog::use_cases::search::{SearchCatalogParams, SearchCatalogUseCase};
use crate::domain::logger::Logger;

pub struct SearchCatalogUseCaseImpl {
    pub catalog: Arc<dyn CatalogSearchService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchCatalogUseCase for SearchCatalogUseCaseImpl {
    async fn execute(&self, params: SearchCatalogParams) -> SearchOutcome {
        let term = params.term.trim();
        if term.is_empty() {
            self.logger.debug("Skipping catalog search for blank term");
            return SearchOutcome::default();
        }

        self.logger.info(&format!(
            "Searching catalog for '{}' (limit {})",
            term, params.limit
        ));

        match self.catalog.search(term, params.limit).await {
            Ok(products) => {
                self.logger.info(&format!(
                    "Found {} products for '{}'",
                    products.len(),
                    term
                ));
                SearchOutcome::found(products)
            }
            Err(error) => {
                self.logger.warn(&format!(
                    "Catalog search for '{}' failed, showing no results: {}",
                    term, error
                ));
                SearchOutcome::degraded()
            }
        }
    }
}
