use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed repository over the `products` table.
///
/// Each method is one SeaORM call, i.e. one short-lived implicit
/// transaction: a failed statement changes nothing.
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let model = self
            .base
            .insert(product.into_insert_model())
            .await
            .map_err(ProductError::Database)?;

        Ok(model.into())
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(ProductError::Database)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(ProductError::Database)?;

        Ok(model.map(|m| m.into()))
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;

        // SeaORM reports an update against a vanished row as RecordNotUpdated
        let model = self
            .base
            .update(product.into_active_model())
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => ProductError::Database(other),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(ProductError::Database)?;

        Ok(rows_affected > 0)
    }
}
