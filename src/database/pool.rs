use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::{Config, StorageBackend};
use crate::database::{memory::MemoryStore, postgres::PgStore, store::LeaveStore};
use crate::error::{Error, Result};

pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let database_url = config.database_url.as_deref().ok_or_else(|| {
        Error::Config("DATABASE_URL is required for the postgres backend".to_string())
    })?;
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Builds the store selected by `STORAGE_BACKEND`, applying migrations
/// when it is Postgres.
pub async fn create_store(config: &Config) -> Result<Arc<dyn LeaveStore>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = create_pool(config).await?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| Error::Internal(format!("Migration failed: {}", e)))?;
            tracing::info!("Connected to Postgres and applied migrations");
            Ok(Arc::new(PgStore::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
