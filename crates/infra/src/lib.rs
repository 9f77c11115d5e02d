//! Infrastructure layer: product storage and catalog orchestration.

pub mod catalog_service;
pub mod fixtures;
pub mod product_store;

mod integration_tests;

pub use catalog_service::{CatalogError, CatalogService};
pub use product_store::{InMemoryProductStore, ProductStore, StoreError};
