//! Catalog Models

use crate::ids::TypedId;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// User Id
pub type UserId = TypedId<User>;

/// Order Id
pub type OrderId = TypedId<Order>;

/// Category Model
///
/// Products reference their category by [`CategoryId`]; use
/// `CatalogService::list_category_products` to walk the relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
}
