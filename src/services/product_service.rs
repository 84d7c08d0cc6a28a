use validator::Validate;

use crate::{
    dto::products::SeededProducts,
    error::{AppError, AppResult},
    models::Product,
    query::search_filter,
    state::AppState,
    store::{Filter, Record, parse_id},
};

const NOT_FOUND: &str = "Products Not Found.";

/// May return an empty list; only plain listings treat "nothing" as 404.
pub async fn search_products(
    state: &AppState,
    search: Option<&str>,
) -> AppResult<Vec<Record<Product>>> {
    let filter = search_filter(search);
    tracing::debug!(?filter, "product search");
    Ok(state.products().find(&filter).await?)
}

pub async fn list_products(state: &AppState) -> AppResult<Vec<Record<Product>>> {
    let products = state.products().find(&Filter::All).await?;
    if products.is_empty() {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(products)
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Record<Product>> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    state
        .products()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

pub async fn create_product(state: &AppState, payload: Product) -> AppResult<Record<Product>> {
    let product = state.products().insert(&payload).await?;
    tracing::info!(product_id = %product.id, model = %product.data.model_name, "product created");
    Ok(product)
}

/// Every product is validated before any is stored.
pub async fn seed_products(
    state: &AppState,
    payload: Vec<Product>,
) -> AppResult<SeededProducts> {
    for (index, product) in payload.iter().enumerate() {
        product.validate().map_err(|errors| {
            AppError::BadRequest(format!(
                "Failed to add product at index {index}. Check input data is in correct format. {errors}"
            ))
        })?;
    }

    let data = state.products().insert_many(&payload).await?;
    tracing::info!(count = data.len(), "products seeded");
    Ok(SeededProducts {
        message: "Data Added Successfully!".to_string(),
        data,
    })
}
