use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        address::AddressPatch,
        cart::{ClearedCart, UpdateQuantityRequest},
        collections::{CollectionPage, EmptyCollection},
        products::SeededProducts,
    },
    models::{Address, CartItem, DescriptionBlock, Product, WishlistItem},
    response::ErrorBody,
    routes::{address, cart, collections, health, products, seed, wishlist},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::search_products,
        products::list_products,
        products::get_product,
        collections::browse_collection,
        seed::seed_product,
        seed::seed_all_products,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        address::list_addresses,
        address::add_address,
        address::update_address,
        address::remove_address
    ),
    components(
        schemas(
            Product,
            DescriptionBlock,
            CartItem,
            WishlistItem,
            Address,
            AddressPatch,
            UpdateQuantityRequest,
            ClearedCart,
            CollectionPage,
            EmptyCollection,
            SeededProducts,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog listing and search"),
        (name = "Collections", description = "Faceted catalog sections"),
        (name = "Seed", description = "Catalog loading"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Address", description = "Buying address endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
