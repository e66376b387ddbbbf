//! Product Models

use rust_decimal::Decimal;

use crate::{domain::catalog::models::CategoryId, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
    pub category_id: CategoryId,
}
