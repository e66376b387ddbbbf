//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            Error::ColumnDecode { .. } => Self::InvalidData,
            error => match error.as_database_error().map(DatabaseError::kind) {
                Some(ErrorKind::CheckViolation) => Self::InvalidData,
                Some(ErrorKind::Other | _) | None => Self::Sql(error),
            },
        }
    }
}
