use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation for an operation on a cart or wishlist entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductConfirmation<T> {
    pub message: String,
    pub product: T,
}

impl<T> ProductConfirmation<T> {
    pub fn new(message: impl Into<String>, product: T) -> Self {
        Self {
            message: message.into(),
            product,
        }
    }
}

/// Confirmation for an operation on a buying address.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressConfirmation<T> {
    pub message: String,
    pub address: T,
}

impl<T> AddressConfirmation<T> {
    pub fn new(message: impl Into<String>, address: T) -> Self {
        Self {
            message: message.into(),
            address,
        }
    }
}
