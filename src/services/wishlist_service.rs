use crate::{
    error::{AppError, AppResult},
    models::WishlistItem,
    response::ProductConfirmation,
    state::AppState,
    store::{Filter, Record, parse_id},
};

pub async fn list_wishlist(state: &AppState) -> AppResult<Vec<Record<WishlistItem>>> {
    let items = state.wishlist().find(&Filter::All).await?;
    if items.is_empty() {
        return Err(AppError::not_found("Products Not Found."));
    }
    Ok(items)
}

pub async fn add_to_wishlist(
    state: &AppState,
    payload: WishlistItem,
) -> AppResult<Record<WishlistItem>> {
    let item = state.wishlist().insert(&payload).await?;
    tracing::info!(wishlist_id = %item.id, "wishlist item added");
    Ok(item)
}

pub async fn remove_from_wishlist(
    state: &AppState,
    id: &str,
) -> AppResult<ProductConfirmation<Record<WishlistItem>>> {
    const NOT_FOUND: &str = "Failed to delete wishlist product not found.";
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    let removed = state
        .wishlist()
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    tracing::info!(wishlist_id = %id, "wishlist item removed");
    Ok(ProductConfirmation::new("Product deleted successfully.", removed))
}
