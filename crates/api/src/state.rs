use std::sync::Arc;

use gapply_ai::Providers;
use gapply_db::StoreNames;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gapply_db::DbPool,
    /// Server configuration (JWT, demo login, CORS).
    pub config: Arc<ServerConfig>,
    /// Table and stored-procedure names.
    pub names: Arc<StoreNames>,
    /// Chat, speech, and avatar clients.
    pub providers: Providers,
}
