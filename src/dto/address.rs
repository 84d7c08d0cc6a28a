use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Partial update of a buying address; absent fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub contact_number: Option<String>,
    #[validate(length(min = 1))]
    pub pincode: Option<String>,
    #[validate(length(min = 1))]
    pub locality: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    #[validate(length(min = 1))]
    pub address_type: Option<String>,
}

impl AddressPatch {
    /// Only the supplied fields, keyed by their stored names.
    pub fn into_document(self) -> Map<String, Value> {
        [
            ("name", self.name),
            ("contactNumber", self.contact_number),
            ("pincode", self.pincode),
            ("locality", self.locality),
            ("address", self.address),
            ("city", self.city),
            ("state", self.state),
            ("addressType", self.address_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_owned(), Value::String(v))))
        .collect()
    }
}
