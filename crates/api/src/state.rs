use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: chairside_db::DbPool,
    /// Server configuration (immutable after startup).
    pub config: Arc<ServerConfig>,
}
