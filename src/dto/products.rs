use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{models::Product, store::Record};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free text such as `samsung 5g under 20000` or `20% off laptop`.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeededProducts {
    pub message: String,
    pub data: Vec<Record<Product>>,
}
