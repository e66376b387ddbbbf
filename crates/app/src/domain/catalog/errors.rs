//! Catalog service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::products::ProductsServiceError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("record not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatalogServiceError {
    fn from(error: Error) -> Self {
        match ProductsServiceError::from(error) {
            ProductsServiceError::NotFound => Self::NotFound,
            ProductsServiceError::InvalidData => Self::InvalidData,
            ProductsServiceError::Sql(source) => Self::Sql(source),
        }
    }
}
