pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod query;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
