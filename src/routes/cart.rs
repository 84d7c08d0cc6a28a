use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::cart::{ClearedCart, UpdateQuantityRequest},
    error::AppResult,
    models::CartItem,
    response::{ErrorBody, ProductConfirmation},
    routes::extract::{AppJson, ValidatedJson},
    services::cart_service,
    state::AppState,
    store::Record,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(cart_list))
        .route("/product", post(add_to_cart))
        .route(
            "/product/{id}",
            delete(remove_from_cart).put(update_cart_quantity),
        )
        .route("/products/delete", delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/cart/products",
    responses(
        (status = 200, description = "Cart items", body = [Record<CartItem>]),
        (status = 404, description = "Cart is empty", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> AppResult<Json<Vec<Record<CartItem>>>> {
    Ok(Json(cart_service::list_cart(&state).await?))
}

#[utoipa::path(
    post,
    path = "/cart/product",
    request_body = CartItem,
    responses(
        (status = 201, description = "Added to cart", body = Record<CartItem>),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartItem>,
) -> AppResult<(StatusCode, Json<Record<CartItem>>)> {
    let item = cart_service::add_to_cart(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/cart/product/{id}",
    params(
        ("id" = String, Path, description = "Cart item id")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity replaced", body = ProductConfirmation<Record<CartItem>>),
        (status = 400, description = "Missing or non-integer quantity", body = ErrorBody),
        (status = 404, description = "Not in cart", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn update_cart_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateQuantityRequest>,
) -> AppResult<Json<ProductConfirmation<Record<CartItem>>>> {
    Ok(Json(cart_service::update_quantity(&state, &id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/cart/product/{id}",
    params(
        ("id" = String, Path, description = "Cart item id")
    ),
    responses(
        (status = 200, description = "Removed", body = ProductConfirmation<Record<CartItem>>),
        (status = 404, description = "Not in cart", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductConfirmation<Record<CartItem>>>> {
    Ok(Json(cart_service::remove_from_cart(&state, &id).await?))
}

#[utoipa::path(
    delete,
    path = "/cart/products/delete",
    responses(
        (status = 200, description = "Every cart item removed", body = ClearedCart)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ClearedCart>> {
    Ok(Json(cart_service::clear_cart(&state).await?))
}
