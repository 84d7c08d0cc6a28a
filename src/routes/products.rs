use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::SearchParams,
    error::AppResult,
    models::Product,
    response::ErrorBody,
    services::product_service,
    state::AppState,
    store::Record,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product/list", get(search_products))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/product/list",
    params(SearchParams),
    responses(
        (status = 200, description = "Products matching any recognised search clue", body = [Record<Product>]),
        (status = 500, description = "Store fault", body = ErrorBody)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Record<Product>>>> {
    let products = product_service::search_products(&state, params.search.as_deref()).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Record<Product>]),
        (status = 404, description = "No products stored", body = ErrorBody)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Record<Product>>>> {
    Ok(Json(product_service::list_products(&state).await?))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product", body = Record<Product>),
        (status = 404, description = "Unknown or malformed id", body = ErrorBody)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record<Product>>> {
    Ok(Json(product_service::get_product(&state, &id).await?))
}
