//! Product listing query string.

use rust_decimal::Decimal;
use serde::Deserialize;

use catalog_app::domain::products::query::{Pagination, ProductQuery};

/// Raw `GET /products` query parameters.
///
/// Numeric fields fail to bind on malformed input; range checks and
/// defaulting are left to [`Pagination`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductIndexQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sku: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub name: Option<String>,
}

impl From<ProductIndexQuery> for ProductQuery {
    fn from(query: ProductIndexQuery) -> Self {
        ProductQuery {
            pagination: Pagination::new(query.page, query.size),
            sku: query.sku,
            min_price: query.min_price,
            max_price: query.max_price,
            name: query.name,
        }
    }
}
