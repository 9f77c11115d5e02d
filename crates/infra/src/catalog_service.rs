//! Catalog operations (application-level orchestration).
//!
//! `CatalogService` sits between the request layer and the product store. It
//! applies the request rules (ID presence, entity validation) and then calls
//! into the injected [`ProductStore`]:
//!
//! ```text
//! request
//!   ↓
//! 1. Check ID rules for the operation
//!   ↓
//! 2. Validate product / prices (no storage touched on failure)
//!   ↓
//! 3. Call the store (save / load / all_ids)
//! ```
//!
//! The service holds no state of its own besides the store handle, so it can
//! be shared across request tasks behind an `Arc`.

use thiserror::Error;

use catalog_core::{DomainError, ProductId};
use catalog_products::{Prices, Product, price};

use crate::product_store::{ProductStore, StoreError};

/// Failure of a catalog operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request broke a field rule. Detected before the store is touched.
    #[error("{0}")]
    Validation(String),
    /// The request referenced a product that does not exist.
    #[error("invalid product id: {0}")]
    InvalidId(ProductId),
    /// The store could not serve the request.
    #[error("store failure: {0}")]
    Store(String),
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::InvalidId(id) => CatalogError::InvalidId(id),
            StoreError::Unavailable(msg) => CatalogError::Store(msg),
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => CatalogError::Validation(msg),
        }
    }
}

/// Product catalog operations over an injected store.
#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> CatalogService<S>
where
    S: ProductStore,
{
    /// Create a new product. The request must not carry an ID.
    pub fn create(&self, product: &Product) -> Result<ProductId, CatalogError> {
        if !product.id.is_unassigned() {
            return Err(CatalogError::Validation("ID must not be specified!".to_string()));
        }
        product.validate()?;

        let id = self.store.save(product)?;
        tracing::info!(product_id = %id, name = %product.name, "product created");
        Ok(id)
    }

    /// Replace an existing product. The request must carry the ID to update.
    pub fn update(&self, product: &Product) -> Result<ProductId, CatalogError> {
        if product.id.is_unassigned() {
            return Err(CatalogError::Validation("ID must be specified!".to_string()));
        }
        product.validate()?;

        let id = self.store.save(product)?;
        tracing::info!(product_id = %id, "product updated");
        Ok(id)
    }

    /// IDs of all products, in no particular order.
    pub fn list(&self) -> Result<Vec<ProductId>, CatalogError> {
        Ok(self.store.all_ids()?)
    }

    /// Full details of one product.
    pub fn details(&self, id: ProductId) -> Result<Product, CatalogError> {
        Ok(self.store.load(id)?)
    }

    /// Merge price points into an existing product.
    ///
    /// Currencies present in `prices` are inserted or overwritten; all other
    /// currencies of the product are kept. To remove a currency, use
    /// [`update`](Self::update) with the full product instead.
    ///
    /// ## Not atomic
    ///
    /// This is a load, merge, save sequence and no lock is held across it.
    /// If another writer saves the same product between the load and the
    /// save, that writer's change is overwritten by this one. Acceptable for
    /// low-contention administrative updates; a caller needing strict
    /// consistency needs an atomic read-modify-write on the store itself.
    pub fn set_prices(&self, id: ProductId, prices: &Prices) -> Result<ProductId, CatalogError> {
        if id.is_unassigned() {
            return Err(CatalogError::Validation("ID must be specified!".to_string()));
        }
        if prices.is_empty() {
            return Err(CatalogError::Validation("Prices must be specified!".to_string()));
        }
        price::validate_all(prices)?;

        let mut product = self.store.load(id)?;
        product.merge_prices(prices);
        let id = self.store.save(&product)?;

        tracing::info!(
            product_id = %id,
            currencies = ?prices.keys().collect::<Vec<_>>(),
            "prices merged"
        );
        Ok(id)
    }
}
