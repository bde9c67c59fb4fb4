//! Read access to the product catalog.

use crate::{
    client::{ClientError, ResourceClient},
    domain::products::models::Product,
};

/// Catalog lookups backing product resolution for carts and order details.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    client: ResourceClient,
}

impl ProductCatalog {
    /// Create a catalog over the given client.
    #[must_use]
    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    /// Fetch a single product; a missing id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates every client failure other than a 404 rejection.
    pub async fn product(&self, id: u64) -> Result<Option<Product>, ClientError> {
        match self.client.get(&format!("/products/{id}")).await {
            Ok(product) => Ok(Some(product)),
            Err(ClientError::Api { status: 404, .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Propagates client failures.
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.client.get("/products").await
    }

    /// Fetch the products in one category.
    ///
    /// # Errors
    ///
    /// Propagates client failures.
    pub async fn products_in_category(&self, category_id: u64) -> Result<Vec<Product>, ClientError> {
        self.client
            .get(&format!("/products?categoryId={category_id}"))
            .await
    }
}
