//! Integration tests for the catalog pipeline under concurrency.
//!
//! Tests: CatalogService → ProductStore (shared across threads)
//!
//! Verifies:
//! - Concurrent creations receive distinct IDs
//! - Readers never observe a half-written product
//! - The documented lost-update window of `set_prices`

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use catalog_core::ProductId;
    use catalog_products::{Price, Prices, Product};

    use crate::catalog_service::CatalogService;
    use crate::product_store::{InMemoryProductStore, ProductStore, StoreError};

    /// A product whose every field encodes `generation`, so a torn write is detectable.
    fn generation_product(id: ProductId, generation: i64) -> Product {
        let label = format!("gen-{generation}");
        Product {
            id,
            ..Product::new(label.clone(), label.clone())
                .with_tags([label])
                .with_price("USD", Price::new(generation, 1))
                .with_price("GBP", Price::new(generation, 100))
        }
    }

    fn assert_consistent(product: &Product) {
        let generation = product.price("USD").expect("USD price").value;
        let label = format!("gen-{generation}");
        assert_eq!(product.name, label);
        assert_eq!(product.description, label);
        assert_eq!(product.tags, vec![label]);
        assert_eq!(product.price("GBP"), Some(&Price::new(generation, 100)));
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let store = Arc::new(InMemoryProductStore::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let store = store.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    (0..PER_THREAD)
                        .map(|_| store.save(&generation_product(ProductId::UNASSIGNED, 1)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(!id.is_unassigned());
                assert!(all.insert(id), "id {id} handed out twice");
            }
        }

        assert_eq!(all.len(), THREADS * PER_THREAD);
        let listed: HashSet<_> = store.all_ids().unwrap().into_iter().collect();
        assert_eq!(listed, all);
    }

    #[test]
    fn readers_never_observe_partial_writes() {
        let store = Arc::new(InMemoryProductStore::new());
        let id = store.save(&generation_product(ProductId::UNASSIGNED, 0)).unwrap();

        thread::scope(|s| {
            for writer in 0..2i64 {
                let store = store.clone();
                s.spawn(move || {
                    for n in 1..=500 {
                        store.save(&generation_product(id, writer * 1000 + n)).unwrap();
                    }
                });
            }
            for _ in 0..4 {
                let store = store.clone();
                s.spawn(move || {
                    for _ in 0..1000 {
                        let product = store.load(id).unwrap();
                        assert_eq!(product.id, id);
                        assert_consistent(&product);
                    }
                });
            }
        });
    }

    #[test]
    fn concurrent_set_prices_on_distinct_currencies_keeps_every_product_valid() {
        let service = Arc::new(CatalogService::new(InMemoryProductStore::new()));
        let id = service
            .create(&Product::new("p", "d").with_price("USD", Price::new(1, 1)))
            .unwrap();

        thread::scope(|s| {
            for currency in ["EUR", "GBP", "HUF", "JPY"] {
                let service = service.clone();
                s.spawn(move || {
                    for n in 0..100 {
                        let mut prices = Prices::new();
                        prices.insert(currency.to_string(), Price::new(n, 1));
                        service.set_prices(id, &prices).unwrap();
                    }
                });
            }
        });

        // Merges may overwrite each other (no lock across load/save), but the
        // untouched default price always survives and the product stays valid.
        let product = service.details(id).unwrap();
        assert_eq!(product.price("USD"), Some(&Price::new(1, 1)));
        assert!(product.validate().is_ok());
    }

    /// Store that lets a test run a write between `set_prices`' load and save.
    struct InterleavingStore<F: Fn(&InMemoryProductStore) + Send + Sync> {
        inner: InMemoryProductStore,
        after_load: F,
    }

    impl<F: Fn(&InMemoryProductStore) + Send + Sync> ProductStore for InterleavingStore<F> {
        fn all_ids(&self) -> Result<Vec<ProductId>, StoreError> {
            self.inner.all_ids()
        }

        fn save(&self, product: &Product) -> Result<ProductId, StoreError> {
            self.inner.save(product)
        }

        fn load(&self, id: ProductId) -> Result<Product, StoreError> {
            let loaded = self.inner.load(id);
            (self.after_load)(&self.inner);
            loaded
        }
    }

    #[test]
    fn set_prices_overwrites_a_write_made_between_load_and_save() {
        let inner = InMemoryProductStore::new();
        let id = inner
            .save(&Product::new("original", "d").with_price("USD", Price::new(1, 1)))
            .unwrap();

        let store = InterleavingStore {
            inner,
            after_load: move |inner: &InMemoryProductStore| {
                let mut concurrent = inner.load(id).unwrap();
                concurrent.name = "renamed concurrently".to_string();
                inner.save(&concurrent).unwrap();
            },
        };
        let service = CatalogService::new(store);

        let mut prices = Prices::new();
        prices.insert("EUR".to_string(), Price::new(2, 1));
        service.set_prices(id, &prices).unwrap();

        let product = service.details(id).unwrap();
        assert_eq!(product.name, "original");
        assert_eq!(product.price("EUR"), Some(&Price::new(2, 1)));
    }
}
