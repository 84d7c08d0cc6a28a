pub mod address_service;
pub mod cart_service;
pub mod collection_service;
pub mod product_service;
pub mod wishlist_service;
