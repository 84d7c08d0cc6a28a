use std::{sync::Arc, time::Duration};

use anyhow::Result;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::{AppConfig, StoreBackend},
    store::{DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreResult},
};

/// Create a Postgres pool; connections are opened on first use.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)?;
    Ok(pool)
}

/// Apply the SQL files in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Build the store selected by `STORE_BACKEND`, migrating Postgres first.
pub async fn connect_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory store; documents are lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = create_pool(config.require_database_url()?, config.db_max_connections)?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgDocumentStore::new(pool)))
        }
    }
}
