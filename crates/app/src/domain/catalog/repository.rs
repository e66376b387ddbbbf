//! Catalog Repository

use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::catalog::models::{Category, CategoryId, Order, OrderId, User, UserId};

const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_USER_ORDERS_SQL: &str = include_str!("sql/list_user_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_category(
        &self,
        conn: &mut PgConnection,
        category: CategoryId,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(GET_CATEGORY_SQL)
            .bind(category.into_i32())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn get_user(
        &self,
        conn: &mut PgConnection,
        user: UserId,
    ) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(GET_USER_SQL)
            .bind(user.into_i32())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        conn: &mut PgConnection,
        order: OrderId,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_i32())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn list_user_orders(
        &self,
        conn: &mut PgConnection,
        user: UserId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_USER_ORDERS_SQL)
            .bind(user.into_i32())
            .fetch_all(&mut *conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_i32(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::from_i32(row.try_get("id")?),
            email: row.try_get("email")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i32(row.try_get("id")?),
            user_id: UserId::from_i32(row.try_get("user_id")?),
        })
    }
}
