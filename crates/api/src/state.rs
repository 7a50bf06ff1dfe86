use std::sync::Arc;

use moviecat_core::service::CatalogueService;
use moviecat_db::PgMovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and service are handles, config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: moviecat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalogue business rules over the PostgreSQL record store.
    pub catalogue: CatalogueService,
}

impl AppState {
    /// Wire the catalogue service to a PostgreSQL record store on `pool`.
    pub fn new(pool: moviecat_db::DbPool, config: Arc<ServerConfig>) -> Self {
        let store = Arc::new(PgMovieStore::new(pool.clone()));
        Self {
            pool,
            config,
            catalogue: CatalogueService::new(store),
        }
    }
}
