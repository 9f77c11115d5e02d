use axum::{
    Router,
    routing::{get, post, put},
};

pub mod products;
pub mod system;

/// Router for the catalog operations.
pub fn router() -> Router {
    Router::new()
        .route("/create", post(products::create_product))
        .route("/list", get(products::list_products))
        .route("/details/:id", get(products::product_details))
        .route("/update", put(products::update_product))
        .route("/setprices", put(products::set_prices))
}
