use anyhow::Context;
use storefront_api::{
    config::AppConfig, db::connect_store, models::Product, services::product_service,
    state::AppState,
};

/// Loads a JSON array of products into the configured store.
///
/// Usage: `seed [path]`, defaulting to `data/products.json`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    config.require_persistent_store()?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/products.json".to_string());

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {path}"))?;
    let products: Vec<Product> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let state = AppState::new(connect_store(&config).await?);
    let seeded = product_service::seed_products(&state, products).await?;

    println!("Seed completed. {} products stored from {path}", seeded.data.len());
    Ok(())
}
