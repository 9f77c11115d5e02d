use axum::Json;
use serde::Serialize;

use catalog_infra::CatalogError;

use crate::app::dto::ApiResponse;

/// Message reported when the store fails for reasons other than a bad ID.
pub const MSG_STORE_UNAVAILABLE: &str = "Product store unavailable";
/// Message reported when no product exists for the requested ID.
pub const MSG_INVALID_ID: &str = "Invalid ID!";

/// The caller-facing message for a catalog failure.
///
/// Validation reasons are passed through verbatim; store internals are not.
pub fn catalog_error_message(err: &CatalogError) -> String {
    match err {
        CatalogError::Validation(msg) => msg.clone(),
        CatalogError::InvalidId(_) => MSG_INVALID_ID.to_string(),
        CatalogError::Store(_) => MSG_STORE_UNAVAILABLE.to_string(),
    }
}

/// Turn an operation result into its envelope.
///
/// Logic failures are still delivered with HTTP 200; `success` tells them apart.
pub fn respond<T: Serialize>(op: &str, result: Result<T, CatalogError>) -> Json<ApiResponse> {
    match result {
        Ok(data) => Json(ApiResponse::ok(op, data)),
        Err(err) => {
            match &err {
                CatalogError::Store(_) => tracing::error!(op, error = %err, "catalog operation failed"),
                _ => tracing::warn!(op, error = %err, "catalog request rejected"),
            }
            Json(ApiResponse::error(op, catalog_error_message(&err)))
        }
    }
}
