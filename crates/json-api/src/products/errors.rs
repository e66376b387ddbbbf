//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidData => {
            error!("stored product data is invalid");

            StatusError::internal_server_error()
        }
        ProductsServiceError::Sql(source) => {
            error!("failed to fetch product: {source}");

            StatusError::internal_server_error()
        }
    }
}
