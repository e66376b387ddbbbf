//! Products Repository

use sqlx::{FromRow, PgConnection, Postgres, QueryBuilder, Row, postgres::PgRow, query_as};

use crate::domain::{
    catalog::models::{CategoryId, OrderId},
    products::{
        models::{Product, ProductId},
        query::{ProductPredicate, ProductQuery},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_CATEGORY_PRODUCTS_SQL: &str = include_str!("sql/list_category_products.sql");
const LIST_ORDER_PRODUCTS_SQL: &str = include_str!("sql/list_order_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        conn: &mut PgConnection,
        query: &ProductQuery,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut builder = list_products_query(query);

        builder
            .build_query_as::<Product>()
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_i32())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn list_category_products(
        &self,
        conn: &mut PgConnection,
        category: CategoryId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_CATEGORY_PRODUCTS_SQL)
            .bind(category.into_i32())
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn list_order_products(
        &self,
        conn: &mut PgConnection,
        order: OrderId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_ORDER_PRODUCTS_SQL)
            .bind(order.into_i32())
            .fetch_all(&mut *conn)
            .await
    }
}

/// Render the listing query: filters first, then a stable page window.
fn list_products_query(query: &ProductQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(LIST_PRODUCTS_SQL);
    let mut separator = "WHERE ";

    for predicate in query.predicates() {
        builder.push(separator);
        separator = " AND ";

        match predicate {
            ProductPredicate::PriceBetween { min, max } => {
                builder
                    .push("price BETWEEN ")
                    .push_bind(min)
                    .push(" AND ")
                    .push_bind(max);
            }
            ProductPredicate::SkuEquals(sku) => {
                builder.push("sku = ").push_bind(sku);
            }
        }
    }

    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(query.pagination.limit())
        .push(" OFFSET ")
        .push_bind(query.pagination.offset());

    builder
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i32(row.try_get("id")?),
            sku: row.try_get("sku")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            is_available: row.try_get("is_available")?,
            category_id: CategoryId::from_i32(row.try_get("category_id")?),
        })
    }
}
