use std::sync::Arc;

use catalog_infra::{CatalogService, InMemoryProductStore, ProductStore, fixtures};

use crate::config::ApiConfig;

/// The catalog as seen by the handlers: any store behind the contract.
pub type Catalog = CatalogService<Arc<dyn ProductStore>>;

/// Wrap an already-built store.
pub fn catalog_with_store(store: Arc<dyn ProductStore>) -> Arc<Catalog> {
    Arc::new(CatalogService::new(store))
}

/// Build the catalog for the process: in-memory store, optionally seeded.
pub fn build_catalog(config: &ApiConfig) -> Arc<Catalog> {
    let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());

    if config.seed_data {
        let ids = fixtures::seed(store.as_ref());
        tracing::info!(count = ids.len(), "demo data inserted");
    }

    catalog_with_store(store)
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    fn config(seed_data: bool) -> ApiConfig {
        ApiConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            seed_data,
        }
    }

    #[test]
    fn seeding_is_controlled_by_config() {
        assert_eq!(build_catalog(&config(true)).list().unwrap().len(), 2);
        assert!(build_catalog(&config(false)).list().unwrap().is_empty());
    }
}
