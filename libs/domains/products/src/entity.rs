//! SeaORM entity for the `products` table.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE products (
//!     id          SERIAL PRIMARY KEY,
//!     name        VARCHAR(100) NOT NULL,
//!     description TEXT NOT NULL DEFAULT '',
//!     price       NUMERIC(10, 2) NOT NULL,
//!     stock       INTEGER NOT NULL,
//!     category    VARCHAR(50) NOT NULL DEFAULT '',
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL
//! );
//! ```

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub stock: i32,
    pub category: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            category: model.category,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl crate::models::Product {
    /// Active model for inserts: the id stays unset so Postgres assigns it.
    pub(crate) fn into_insert_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            ..self.into_active_model()
        }
    }

    /// Active model with every column set, for full-row updates.
    pub(crate) fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            stock: Set(self.stock),
            category: Set(self.category),
            created_at: Set(self.created_at.into()),
            updated_at: Set(self.updated_at.into()),
        }
    }
}
