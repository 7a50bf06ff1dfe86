//! PostgreSQL record store for the movie catalogue.
//!
//! Provides pool bootstrap and migrations, the raw [`repositories::MovieRepo`]
//! queries, and [`PgMovieStore`], which adapts them to the
//! [`moviecat_core::store::MovieStore`] port.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod rating_codec;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use store::PgMovieStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections = config.max_connections, "Creating database pool");
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
