use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use catalog_core::ProductId;
use catalog_products::Product;

use crate::app::dto::{self, ApiResponse, IdData, SetPricesRequest};
use crate::app::errors;
use crate::app::services::Catalog;

pub async fn create_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Json(product): Json<Product>,
) -> Json<ApiResponse> {
    errors::respond(dto::OP_CREATE, catalog.create(&product).map(IdData::from))
}

pub async fn update_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Json(product): Json<Product>,
) -> Json<ApiResponse> {
    errors::respond(dto::OP_UPDATE, catalog.update(&product).map(IdData::from))
}

pub async fn list_products(Extension(catalog): Extension<Arc<Catalog>>) -> Json<ApiResponse> {
    errors::respond(dto::OP_LIST, catalog.list())
}

pub async fn product_details(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<ProductId>() {
        Ok(id) if !id.is_unassigned() => id,
        _ => {
            tracing::warn!(path_id = %id, "invalid details path");
            return (StatusCode::BAD_REQUEST, "Path must be like /details/id").into_response();
        }
    };

    errors::respond(dto::OP_DETAILS, catalog.details(id)).into_response()
}

pub async fn set_prices(
    Extension(catalog): Extension<Arc<Catalog>>,
    Json(body): Json<SetPricesRequest>,
) -> Json<ApiResponse> {
    errors::respond(
        dto::OP_SET_PRICES,
        catalog.set_prices(body.id, &body.prices).map(IdData::from),
    )
}
