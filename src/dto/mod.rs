pub mod address;
pub mod cart;
pub mod collections;
pub mod products;
