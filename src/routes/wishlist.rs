use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    error::AppResult,
    models::WishlistItem,
    response::{ErrorBody, ProductConfirmation},
    routes::extract::ValidatedJson,
    services::wishlist_service,
    state::AppState,
    store::Record,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist))
        .route("/wishlistProduct", post(add_to_wishlist))
        .route("/{id}", delete(remove_from_wishlist))
}

#[utoipa::path(
    get,
    path = "/wishlist",
    responses(
        (status = 200, description = "Wishlist items", body = [Record<WishlistItem>]),
        (status = 404, description = "Wishlist is empty", body = ErrorBody)
    ),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Record<WishlistItem>>>> {
    Ok(Json(wishlist_service::list_wishlist(&state).await?))
}

#[utoipa::path(
    post,
    path = "/wishlist/wishlistProduct",
    request_body = WishlistItem,
    responses(
        (status = 201, description = "Added to wishlist", body = Record<WishlistItem>),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody)
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<WishlistItem>,
) -> AppResult<(StatusCode, Json<Record<WishlistItem>>)> {
    let item = wishlist_service::add_to_wishlist(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/wishlist/{id}",
    params(
        ("id" = String, Path, description = "Wishlist item id")
    ),
    responses(
        (status = 200, description = "Removed", body = ProductConfirmation<Record<WishlistItem>>),
        (status = 404, description = "Not in wishlist", body = ErrorBody)
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductConfirmation<Record<WishlistItem>>>> {
    Ok(Json(wishlist_service::remove_from_wishlist(&state, &id).await?))
}
