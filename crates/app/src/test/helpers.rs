//! Test Helpers
//!
//! The service layer is read-only, so fixtures are written with plain SQL.

use rust_decimal::Decimal;
use sqlx::{query, query_scalar};

use crate::{
    domain::{
        catalog::models::{CategoryId, OrderId, UserId},
        products::models::ProductId,
    },
    test::TestContext,
};

/// Product row to insert; `name` defaults to `"Product {sku}"`.
#[derive(Debug, Clone)]
pub(crate) struct ProductFixture {
    pub category: CategoryId,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
}

impl ProductFixture {
    pub(crate) fn new(category: CategoryId, sku: &str, price: Decimal) -> Self {
        Self {
            category,
            sku: sku.to_string(),
            name: format!("Product {sku}"),
            description: String::new(),
            price,
            is_available: false,
        }
    }
}

impl TestContext {
    pub(crate) async fn insert_category(&self, name: &str) -> Result<CategoryId, sqlx::Error> {
        let id: i32 = query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.db.pool())
            .await?;

        Ok(CategoryId::from_i32(id))
    }

    pub(crate) async fn insert_product(
        &self,
        product: ProductFixture,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i32 = query_scalar(
            "INSERT INTO products (category_id, sku, name, description, price, is_available) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(product.category.into_i32())
        .bind(product.sku)
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.is_available)
        .fetch_one(self.db.pool())
        .await?;

        Ok(ProductId::from_i32(id))
    }

    pub(crate) async fn insert_user(&self, email: &str) -> Result<UserId, sqlx::Error> {
        let id: i32 = query_scalar("INSERT INTO users (email) VALUES ($1) RETURNING id")
            .bind(email)
            .fetch_one(self.db.pool())
            .await?;

        Ok(UserId::from_i32(id))
    }

    pub(crate) async fn insert_order(
        &self,
        user: UserId,
        products: &[ProductId],
    ) -> Result<OrderId, sqlx::Error> {
        let id: i32 = query_scalar("INSERT INTO orders (user_id) VALUES ($1) RETURNING id")
            .bind(user.into_i32())
            .fetch_one(self.db.pool())
            .await?;

        for product in products {
            query("INSERT INTO order_products (order_id, product_id) VALUES ($1, $2)")
                .bind(id)
                .bind(product.into_i32())
                .execute(self.db.pool())
                .await?;
        }

        Ok(OrderId::from_i32(id))
    }
}
