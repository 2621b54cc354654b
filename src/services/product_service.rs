//! Product service - inventory use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a new product
    async fn add_product(&self, product: NewProduct) -> AppResult<Product>;

    /// Get a product by id
    ///
    /// Fails with `NotFound` for an unknown product id.
    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// Set the quantity of an existing product
    ///
    /// Fails with `NotFound` for an unknown product id.
    async fn update_quantity(&self, id: i32, quantity: i32) -> AppResult<Product>;

    /// List products in insertion order, `limit` items from offset `skip`
    async fn list_products(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductService using Unit of Work.
pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    /// Create new product service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn add_product(&self, product: NewProduct) -> AppResult<Product> {
        self.uow.products().insert(product).await
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.uow
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> AppResult<Product> {
        self.uow.products().set_quantity(id, quantity).await
    }

    async fn list_products(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>> {
        self.uow.products().list(skip, limit).await
    }
}
