//! Unit of Work - centralized repository access.
//!
//! Every request performs at most a few sequential statements, so
//! there is no application-level transaction coordination here; the
//! database's own isolation is the only ordering guarantee.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    product_repo: Arc<ProductStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let product_repo = Arc::new(ProductStore::new(db));
        Self {
            user_repo,
            product_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }
}
