//! Catalog Domain Concerns

pub mod catalog;
pub mod products;
