use cm_config::Config;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Cloned per request; both fields are handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
