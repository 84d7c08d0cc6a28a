use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    dto::collections::{CollectionPage, EmptyCollection},
    error::{AppError, AppResult},
    query::CatalogCollection,
    response::ErrorBody,
    services::collection_service::{self, CollectionOutcome},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{collection}", get(browse_collection))
}

#[utoipa::path(
    get,
    path = "/collection/{collection}",
    params(
        ("collection" = String, Path, description = "`mobiles&tablets` or `laptops`"),
        ("brand" = Option<String>, Query, description = "Comma separated brands"),
        ("ram" = Option<String>, Query, description = "Comma separated RAM sizes"),
        ("internalXstorage" = Option<String>, Query, description = "Mobiles & tablets: internal storage"),
        ("primaryXcamera" = Option<String>, Query, description = "Mobiles & tablets: primary camera"),
        ("secondaryXcamera" = Option<String>, Query, description = "Mobiles & tablets: secondary camera"),
        ("processorXbrand" = Option<String>, Query, description = "Processor brand"),
        ("ssd" = Option<String>, Query, description = "Laptops: SSD sizes"),
        ("type" = Option<String>, Query, description = "Laptops: type"),
        ("processorXgeneration" = Option<String>, Query, description = "Laptops: processor generation"),
        ("processorXname" = Option<String>, Query, description = "Laptops: processor name")
    ),
    responses(
        (status = 200, description = "Matching products with facet values", body = CollectionPage),
        (status = 404, description = "No match; facet values still returned", body = EmptyCollection),
        (status = 500, description = "Store fault", body = ErrorBody)
    ),
    tag = "Collections"
)]
pub async fn browse_collection(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    let collection = collection
        .parse::<CatalogCollection>()
        .map_err(|_| AppError::not_found(format!("Unknown collection `{collection}`.")))?;

    let response = match collection_service::browse_collection(&state, collection, &params).await? {
        CollectionOutcome::Found(page) => (StatusCode::OK, Json(page)).into_response(),
        CollectionOutcome::Empty(empty) => (StatusCode::NOT_FOUND, Json(empty)).into_response(),
    };
    Ok(response)
}
