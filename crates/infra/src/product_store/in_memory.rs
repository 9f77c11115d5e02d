use std::collections::HashMap;
use std::sync::RwLock;

use catalog_core::ProductId;
use catalog_products::Product;

use super::r#trait::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    products: HashMap<ProductId, Product>,
    /// Last minted ID; the next new product gets `last_id.next()`.
    last_id: ProductId,
}

/// In-memory product store, safe for concurrent use.
///
/// A single `RwLock` guards both the product map and the ID counter: reads
/// (`all_ids`, `load`) share the lock, `save` holds it exclusively for the
/// whole operation. Products are cloned on the way in and on the way out, so
/// nothing a caller holds ever aliases stored state.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.products.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl ProductStore for InMemoryProductStore {
    /// Never fails unless the lock is poisoned.
    fn all_ids(&self) -> Result<Vec<ProductId>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.products.keys().copied().collect())
    }

    fn save(&self, product: &Product) -> Result<ProductId, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let id = if product.id.is_unassigned() {
            let id = inner.last_id.next();
            inner.last_id = id;
            id
        } else if inner.products.contains_key(&product.id) {
            product.id
        } else {
            tracing::debug!(product_id = %product.id, "save rejected: unknown product id");
            return Err(StoreError::InvalidId(product.id));
        };

        let mut stored = product.clone();
        stored.id = id;
        inner.products.insert(id, stored);

        tracing::debug!(product_id = %id, "product saved");
        Ok(id)
    }

    fn load(&self, id: ProductId) -> Result<Product, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner
            .products
            .get(&id)
            .cloned()
            .ok_or(StoreError::InvalidId(id))
    }
}
