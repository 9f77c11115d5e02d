//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store construction and catalog wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and the response envelope
//! - `errors.rs`: mapping catalog failures to envelope messages

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is injected here once; handlers reach it through the
/// `Extension` layer and never through a global.
pub fn build_app(catalog: Arc<services::Catalog>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(Extension(catalog)),
        )
}
