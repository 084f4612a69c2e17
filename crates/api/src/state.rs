use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the pool is already a handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: arbolado_db::DbPool,
    /// Server configuration (JWT secret, admin seed, timeouts).
    pub config: Arc<ServerConfig>,
}
