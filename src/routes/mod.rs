use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::json;

use crate::state::AppState;

pub mod address;
pub mod cart;
pub mod collections;
pub mod doc;
pub mod extract;
pub mod health;
pub mod products;
pub mod seed;
pub mod wishlist;

/// Largest accepted request body; bulk seeding sends whole catalogs.
pub const BODY_LIMIT: usize = 5 * 1024 * 1024;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(products::router())
        .nest("/collection", collections::router())
        .nest("/seedProduct", seed::router())
        .nest("/wishlist", wishlist::router())
        .nest("/cart", cart::router())
        .nest("/address", address::router())
}

/// Every route, the docs and the fallback, bound to `state`. Middleware is
/// layered on by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not Found", "path": uri.path() })),
    )
}
