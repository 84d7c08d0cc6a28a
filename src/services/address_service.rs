use crate::{
    dto::address::AddressPatch,
    error::{AppError, AppResult},
    models::Address,
    response::AddressConfirmation,
    state::AppState,
    store::{Filter, Record, parse_id},
};

const NOT_FOUND: &str = "Address not found.";

pub async fn list_addresses(state: &AppState) -> AppResult<Vec<Record<Address>>> {
    let addresses = state.addresses().find(&Filter::All).await?;
    if addresses.is_empty() {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(addresses)
}

pub async fn add_address(state: &AppState, payload: Address) -> AppResult<Record<Address>> {
    let address = state.addresses().insert(&payload).await?;
    tracing::info!(address_id = %address.id, "address added");
    Ok(address)
}

pub async fn update_address(
    state: &AppState,
    id: &str,
    payload: AddressPatch,
) -> AppResult<AddressConfirmation<Record<Address>>> {
    const NOT_FOUND_UPDATE: &str = "Failed to update. Address not found.";
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND_UPDATE));
    };
    let updated = state
        .addresses()
        .update_by_id(id, payload.into_document())
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_UPDATE))?;
    Ok(AddressConfirmation::new("Address updated successfully.", updated))
}

pub async fn remove_address(
    state: &AppState,
    id: &str,
) -> AppResult<AddressConfirmation<Record<Address>>> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    let removed = state
        .addresses()
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    tracing::info!(address_id = %id, "address removed");
    Ok(AddressConfirmation::new("Successfully deleted address", removed))
}
