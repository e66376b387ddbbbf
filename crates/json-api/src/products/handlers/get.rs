//! Get Product Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::{Product, ProductId};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i32,

    /// Stock keeping unit
    pub sku: String,

    /// Display name
    pub name: String,

    /// Free text description
    pub description: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Whether the product can currently be ordered
    pub is_available: bool,

    /// The category the product belongs to
    pub category_id: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_i32(),
            sku: product.sku,
            name: product.name,
            description: product.description,
            price: product.price,
            is_available: product.is_available,
            category_id: product.category_id.into_i32(),
        }
    }
}

/// Ids too large for the key column cannot name a stored product.
fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.parse::<i32>().ok().map(ProductId::from_i32)
}

/// Get Product Handler
///
/// Returns a single product by id.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let Some(product) = parse_product_id(&id.into_inner()) else {
        return Err(StatusError::not_found().brief("Product not found"));
    };

    let product = state
        .products
        .get_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
