//! Product repository - persistence operations for products.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use super::entities::product::{self, Entity as ProductEntity};
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};

/// Product repository trait for dependency injection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its generated id
    async fn insert(&self, product: NewProduct) -> AppResult<Product>;

    /// Find a product by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Set the quantity of an existing product
    ///
    /// Fails with `NotFound` if no product has the given id.
    async fn set_quantity(&self, id: i32, quantity: i32) -> AppResult<Product>;

    /// List products in insertion (id) order, `limit` items from offset `skip`
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>>;
}

/// SeaORM-backed product repository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = product::ActiveModel {
            name: Set(product.name),
            kind: Set(product.kind),
            sku: Set(product.sku),
            image_url: Set(product.image_url),
            description: Set(product.description),
            quantity: Set(product.quantity),
            price: Set(product.price),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Product::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn set_quantity(&self, id: i32, quantity: i32) -> AppResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))?;

        let mut active: product::ActiveModel = model.into();
        active.quantity = Set(quantity);

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Product::from(model))
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}
