//! Product persistence boundary.
//!
//! This module defines the storage abstraction every higher layer depends on,
//! plus the in-memory implementation used by the service today.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StoreError};
