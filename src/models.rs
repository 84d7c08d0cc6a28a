use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Catalog product. Cart and wishlist entries carry a copy of these fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[validate(length(min = 1))]
    pub collection_type: String,
    #[validate(length(min = 1))]
    pub sub_collection_type: String,
    #[validate(length(min = 1))]
    pub model_name: String,
    #[validate(length(min = 1))]
    pub model_sub_content: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub mrp: f64,
    pub discount: f64,
    #[validate(length(min = 1))]
    pub product_image_url: String,
    #[serde(default)]
    pub product_images_url: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[validate(length(min = 1))]
    pub warranty: String,
    /// Category specific attributes such as `brand`, `ram` or `processor`.
    #[schema(value_type = Object)]
    pub features: Map<String, Value>,
    #[serde(default)]
    #[validate(nested)]
    pub description: Vec<DescriptionBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionBlock {
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CartItem {
    #[serde(flatten)]
    #[validate(nested)]
    pub product: Product,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct WishlistItem {
    #[serde(flatten)]
    #[validate(nested)]
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub contact_number: String,
    #[validate(length(min = 1))]
    pub pincode: String,
    #[validate(length(min = 1))]
    pub locality: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub address_type: String,
}
