use std::sync::Arc;

use crate::{
    models::{Address, CartItem, Product, WishlistItem},
    store::{Collection, DocumentStore, Documents, MemoryDocumentStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()))
    }

    pub fn products(&self) -> Documents<'_, Product> {
        Documents::new(self.store.as_ref(), Collection::Products)
    }

    pub fn wishlist(&self) -> Documents<'_, WishlistItem> {
        Documents::new(self.store.as_ref(), Collection::Wishlist)
    }

    pub fn cart(&self) -> Documents<'_, CartItem> {
        Documents::new(self.store.as_ref(), Collection::Cart)
    }

    pub fn addresses(&self) -> Documents<'_, Address> {
        Documents::new(self.store.as_ref(), Collection::Addresses)
    }
}
