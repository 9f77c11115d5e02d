//! Products domain module.
//!
//! This crate contains the catalog entity model: products and their price
//! points, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod price;
pub mod product;

pub use price::{Price, Prices};
pub use product::{DEFAULT_CURRENCY, Product};
