use crate::config::loader::Config;
use crate::models::upload_dto::create_uploads_table;
use sqlx::SqlitePool;
use tracing::info;

pub async fn init_db(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let connection_string = config.database_url();
    info!("Using database: {}", connection_string);
    let pool = SqlitePool::connect(&connection_string).await?;

    create_uploads_table(&pool).await?;

    Ok(pool)
}

/// Single-connection in-memory ledger. Every connection to `sqlite::memory:`
/// opens its own database, so the pool must never hold more than one.
#[cfg(test)]
pub async fn init_memory_db() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("Database connection failed: {e}"));

    create_uploads_table(&pool)
        .await
        .expect("failed to create the uploads table");

    pool
}
