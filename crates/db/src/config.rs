use moviecat_core::config::{env_or, require_env, ConfigError};

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Connection settings for the record store.
///
/// Built once at startup and passed to [`crate::create_pool`]; nothing in
/// this crate reads credentials from global state.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL, credentials included.
    pub url: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load from the environment.
    ///
    /// | Env Var              | Default    |
    /// |----------------------|------------|
    /// | `DATABASE_URL`       | (required) |
    /// | `DB_MAX_CONNECTIONS` | `20`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: require_env("DATABASE_URL")?,
            max_connections: env_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}
