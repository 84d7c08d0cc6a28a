use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{models::Product, store::Record};

/// Distinct values of every facet, keyed by query parameter name.
pub type FacetValues = BTreeMap<String, Vec<Value>>;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionPage {
    pub products: Vec<Record<Product>>,
    /// Distinct `subCollectionType` values in the collection.
    #[schema(value_type = Vec<Object>)]
    pub collection: Vec<Value>,
    #[schema(value_type = Object)]
    pub filters: FacetValues,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyCollection {
    pub message: String,
    #[schema(value_type = Object)]
    pub filters: FacetValues,
}
