use serde_json::{Map, Value};

use crate::{
    dto::cart::{ClearedCart, UpdateQuantityRequest},
    error::{AppError, AppResult},
    models::CartItem,
    response::ProductConfirmation,
    state::AppState,
    store::{Filter, Record, parse_id},
};

pub async fn list_cart(state: &AppState) -> AppResult<Vec<Record<CartItem>>> {
    let items = state.cart().find(&Filter::All).await?;
    if items.is_empty() {
        return Err(AppError::not_found("Products Not Found."));
    }
    Ok(items)
}

pub async fn add_to_cart(state: &AppState, payload: CartItem) -> AppResult<Record<CartItem>> {
    let item = state.cart().insert(&payload).await?;
    tracing::info!(cart_id = %item.id, quantity = item.data.quantity, "cart item added");
    Ok(item)
}

/// Overwrites the stored quantity; concurrent updates are last-write-wins.
pub async fn update_quantity(
    state: &AppState,
    id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ProductConfirmation<Record<CartItem>>> {
    const NOT_FOUND: &str = "Failed to update cart product not found.";
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    let mut patch = Map::new();
    patch.insert("quantity".to_string(), Value::from(payload.quantity));

    let updated = state
        .cart()
        .update_by_id(id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ProductConfirmation::new("Product update successfully.", updated))
}

pub async fn remove_from_cart(
    state: &AppState,
    id: &str,
) -> AppResult<ProductConfirmation<Record<CartItem>>> {
    const NOT_FOUND: &str = "Failed to delete cart product not found.";
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    let removed = state
        .cart()
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    tracing::info!(cart_id = %id, "cart item removed");
    Ok(ProductConfirmation::new("Product deleted successfully.", removed))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ClearedCart> {
    let deleted_count = state.cart().delete_all().await?;
    tracing::info!(deleted_count, "cart cleared");
    Ok(ClearedCart {
        message: "Deleted all products from cart.".to_string(),
        deleted_count,
    })
}
