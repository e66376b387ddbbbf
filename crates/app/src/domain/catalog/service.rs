//! Catalog service.
//!
//! Relations are resolved on demand from foreign keys rather than held as
//! object references on the models.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        catalog::{
            errors::CatalogServiceError,
            models::{Category, CategoryId, Order, OrderId, User, UserId},
            repository::PgCatalogRepository,
        },
        products::{PgProductsRepository, models::Product},
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
    products: PgProductsRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn get_category(&self, category: CategoryId) -> Result<Category, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.get_category(&mut conn, category).await?)
    }

    async fn list_category_products(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self
            .products
            .list_category_products(&mut conn, category)
            .await?)
    }

    async fn get_user(&self, user: UserId) -> Result<User, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.get_user(&mut conn, user).await?)
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.get_order(&mut conn, order).await?)
    }

    async fn list_user_orders(&self, user: UserId) -> Result<Vec<Order>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.list_user_orders(&mut conn, user).await?)
    }

    async fn list_order_products(
        &self,
        order: OrderId,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.products.list_order_products(&mut conn, order).await?)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryId) -> Result<Category, CatalogServiceError>;

    /// Products belonging to a category, by id. Unknown categories yield an
    /// empty list.
    async fn list_category_products(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<User, CatalogServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Order, CatalogServiceError>;

    /// Orders placed by a user, by id.
    async fn list_user_orders(&self, user: UserId) -> Result<Vec<Order>, CatalogServiceError>;

    /// Products contained in an order, by id.
    async fn list_order_products(
        &self,
        order: OrderId,
    ) -> Result<Vec<Product>, CatalogServiceError>;
}
