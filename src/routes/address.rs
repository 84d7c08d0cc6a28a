use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::address::AddressPatch,
    error::AppResult,
    models::Address,
    response::{AddressConfirmation, ErrorBody},
    routes::extract::ValidatedJson,
    services::address_service,
    state::AppState,
    store::Record,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(add_address))
        .route("/{id}", put(update_address).delete(remove_address))
}

#[utoipa::path(
    get,
    path = "/address",
    responses(
        (status = 200, description = "Buying addresses", body = [Record<Address>]),
        (status = 404, description = "No address stored", body = ErrorBody)
    ),
    tag = "Address"
)]
pub async fn list_addresses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Record<Address>>>> {
    Ok(Json(address_service::list_addresses(&state).await?))
}

#[utoipa::path(
    post,
    path = "/address",
    request_body = Address,
    responses(
        (status = 201, description = "Address stored", body = Record<Address>),
        (status = 400, description = "Missing or blank fields", body = ErrorBody)
    ),
    tag = "Address"
)]
pub async fn add_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Address>,
) -> AppResult<(StatusCode, Json<Record<Address>>)> {
    let address = address_service::add_address(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

#[utoipa::path(
    put,
    path = "/address/{id}",
    params(
        ("id" = String, Path, description = "Address id")
    ),
    request_body = AddressPatch,
    responses(
        (status = 200, description = "Address updated", body = AddressConfirmation<Record<Address>>),
        (status = 400, description = "Blank field in patch", body = ErrorBody),
        (status = 404, description = "Unknown address", body = ErrorBody)
    ),
    tag = "Address"
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AddressPatch>,
) -> AppResult<Json<AddressConfirmation<Record<Address>>>> {
    Ok(Json(address_service::update_address(&state, &id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/address/{id}",
    params(
        ("id" = String, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "Address removed", body = AddressConfirmation<Record<Address>>),
        (status = 404, description = "Unknown address", body = ErrorBody)
    ),
    tag = "Address"
)]
pub async fn remove_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AddressConfirmation<Record<Address>>>> {
    Ok(Json(address_service::remove_address(&state, &id).await?))
}
