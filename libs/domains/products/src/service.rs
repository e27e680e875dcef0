use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic.
///
/// Every write goes through two validation passes: the DTO's `validator`
/// rules (collect-all, request-boundary thresholds) and the entity's own
/// validators inside `Product::new` / `Product::apply_update` (fail-fast).
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = Product::new(input)?;

        self.repository.create(product).await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// Apply a partial update to an existing product.
    ///
    /// Unsupplied fields keep their prior values; `updated_at` refreshes on
    /// any successful update.
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = self.get_product(id).await?;
        product.apply_update(input)?;

        self.repository.update(product).await
    }

    /// Hard-delete a product, returning the row as it was deleted
    pub async fn delete_product(&self, id: i32) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        let deleted = self.repository.delete(id).await?;

        // The row can vanish between the read and the delete
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(product)
    }
}
