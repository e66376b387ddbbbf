//! Products

pub mod errors;
pub mod models;
pub mod query;
mod repository;
pub mod service;

pub(crate) use repository::PgProductsRepository;

pub use errors::ProductsServiceError;
pub use service::*;
