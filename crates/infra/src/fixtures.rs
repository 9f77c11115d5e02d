//! Demo catalog contents.

use catalog_core::ProductId;
use catalog_products::{Price, Product};

use crate::product_store::{ProductStore, StoreError};

/// Products inserted on startup when demo data is enabled.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("small-prod", "short-desc").with_price("USD", Price::new(1, 1)),
        Product::new("Full-prod", "long description is entered here")
            .with_tags(["Big", "Full", "Giant"])
            .with_price("USD", Price::new(100, 1))
            .with_price("GBP", Price::new(7528, 100))
            .with_price("HUF", Price::new(27725, 1)),
    ]
}

/// Save the demo products into `store`.
///
/// Failures are logged and skipped; the IDs of the saved products are returned.
pub fn seed<S: ProductStore + ?Sized>(store: &S) -> Vec<ProductId> {
    let mut ids = Vec::new();
    for product in demo_products() {
        match store.save(&product) {
            Ok(id) => {
                tracing::info!(product_id = %id, name = %product.name, "demo product inserted");
                ids.push(id);
            }
            Err(e) => log_seed_failure(&product, &e),
        }
    }
    ids
}

fn log_seed_failure(product: &Product, err: &StoreError) {
    tracing::warn!(name = %product.name, error = %err, "failed to insert demo product");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::InMemoryProductStore;

    #[test]
    fn demo_products_are_valid_and_new() {
        for product in demo_products() {
            assert!(product.validate().is_ok(), "{} should validate", product.name);
            assert!(product.id.is_unassigned());
        }
    }

    #[test]
    fn seed_saves_every_demo_product() {
        let store = InMemoryProductStore::new();
        let ids = seed(&store);
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);

        let full = store.load(ids[1]).unwrap();
        assert_eq!(full.tags, vec!["Big", "Full", "Giant"]);
        assert_eq!(full.price("HUF"), Some(&Price::new(27725, 1)));
    }
}
