use std::sync::Arc;

use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::Product;

/// Product store operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (validation). `InvalidId` is the only variant callers are expected to
/// pattern-match on; everything else is implementation specific.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation referenced a product that does not exist.
    #[error("invalid product id: {0}")]
    InvalidId(ProductId),

    /// The backing storage could not serve the request.
    #[error("product store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary for products.
///
/// Implementations decide where products live (memory, file, SQL, ...).
/// Callers only ever see this trait, so backends are interchangeable.
///
/// ## Ownership
///
/// Values cross this boundary **by copy**. `save` must not keep anything that
/// aliases the caller's product, and `load` must hand out a product the caller
/// can mutate freely without affecting stored state.
///
/// ## Identity
///
/// The store owns product identity. A product with [`ProductId::UNASSIGNED`]
/// is new and receives a fresh, never-reused ID on save. Any other ID must
/// already exist, otherwise the operation fails with [`StoreError::InvalidId`].
///
/// ## Validation
///
/// Stores never validate product content, only ID existence. Validation is
/// the caller's job and happens before the store is touched.
pub trait ProductStore: Send + Sync {
    /// IDs of all stored products, in no particular order.
    fn all_ids(&self) -> Result<Vec<ProductId>, StoreError>;

    /// Save a product.
    ///
    /// - Unassigned ID: a new ID is minted and a copy is stored under it.
    /// - Assigned ID: the stored product is fully replaced by a copy of
    ///   `product` (not merged); fails with `InvalidId` if it does not exist.
    ///
    /// Returns the effective ID.
    fn save(&self, product: &Product) -> Result<ProductId, StoreError>;

    /// Load a detached copy of the product stored under `id`.
    fn load(&self, id: ProductId) -> Result<Product, StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn all_ids(&self) -> Result<Vec<ProductId>, StoreError> {
        (**self).all_ids()
    }

    fn save(&self, product: &Product) -> Result<ProductId, StoreError> {
        (**self).save(product)
    }

    fn load(&self, id: ProductId) -> Result<Product, StoreError> {
        (**self).load(id)
    }
}
