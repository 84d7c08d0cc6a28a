use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::products::SeededProducts,
    error::AppResult,
    models::Product,
    response::ErrorBody,
    routes::extract::{AppJson, ValidatedJson},
    services::product_service,
    state::AppState,
    store::Record,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(seed_product))
        .route("/allProducts", post(seed_all_products))
}

#[utoipa::path(
    post,
    path = "/seedProduct/product",
    request_body = Product,
    responses(
        (status = 201, description = "Product stored", body = Record<Product>),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody)
    ),
    tag = "Seed"
)]
pub async fn seed_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Product>,
) -> AppResult<(StatusCode, Json<Record<Product>>)> {
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    post,
    path = "/seedProduct/allProducts",
    request_body = Vec<Product>,
    responses(
        (status = 201, description = "All products stored", body = SeededProducts),
        (status = 400, description = "At least one product is invalid; nothing stored", body = ErrorBody)
    ),
    tag = "Seed"
)]
pub async fn seed_all_products(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Vec<Product>>,
) -> AppResult<(StatusCode, Json<SeededProducts>)> {
    let seeded = product_service::seed_products(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(seeded)))
}
