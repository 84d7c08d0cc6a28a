use std::collections::HashMap;

use serde_json::Value;

use crate::{
    dto::collections::{CollectionPage, EmptyCollection, FacetValues},
    error::AppResult,
    query::CatalogCollection,
    state::AppState,
    store::filter::SUB_COLLECTION_TYPE,
};

pub enum CollectionOutcome {
    Found(CollectionPage),
    Empty(EmptyCollection),
}

/// Filtered products of one catalog collection plus the facet values for
/// the whole collection.
pub async fn browse_collection(
    state: &AppState,
    collection: CatalogCollection,
    params: &HashMap<String, String>,
) -> AppResult<CollectionOutcome> {
    let filter = collection.filter(params);
    tracing::debug!(%collection, ?filter, "collection query");
    let products = state.products().find(&filter).await?;

    let scope = collection.scope();
    let mut filters = FacetValues::new();
    for facet in collection.facets() {
        let values = state.products().distinct(facet.field, &scope).await?;
        filters.insert(facet.param.to_string(), values);
    }

    if products.is_empty() {
        return Ok(CollectionOutcome::Empty(EmptyCollection {
            message: "No products found matching the criteria.".to_string(),
            filters,
        }));
    }

    let sub_collections: Vec<Value> = state
        .products()
        .distinct(SUB_COLLECTION_TYPE, &scope)
        .await?;
    Ok(CollectionOutcome::Found(CollectionPage {
        products,
        collection: sub_collections,
        filters,
    }))
}
