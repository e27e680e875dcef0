use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence.
///
/// Callers hand in already validated entities; implementations own id and
/// nothing else - no SQL or driver types leak through this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product; the returned copy has the storage-assigned id.
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// All products in insertion (id) order.
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Look up a product by id.
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Persist an already-merged product row.
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Hard-delete by id; returns false when the row did not exist.
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    rows: HashMap<i32, Product>,
    next_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        product.id = store.next_id;
        store.rows.insert(product.id, product.clone());

        Ok(product)
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store.rows.values().cloned().collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        if !store.rows.contains_key(&product.id) {
            return Err(ProductError::NotFound(product.id));
        }

        store.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.rows.remove(&id).is_some())
    }
}
