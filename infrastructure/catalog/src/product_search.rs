use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::CatalogSearchService;

use crate::client::CatalogClient;
use crate::dto::ProductsResponse;

/// Full-text product search against `GET /api/products`.
pub struct ProductSearchHttp {
    client: CatalogClient,
}

impl ProductSearchHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSearchService for ProductSearchHttp {
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Product>, CatalogError> {
        let limit = limit.to_string();

        let response = self
            .client
            .client
            .get(self.client.products_url())
            .header("Accept", "application/json")
            .query(&[("search", term), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|_| CatalogError::network())?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::status(status.as_u16()));
        }

        let data: ProductsResponse = response
            .json()
            .await
            .map_err(|_| CatalogError::invalid_response())?;

        Ok(data.products.into_iter().map(Product::from).collect())
    }
}
