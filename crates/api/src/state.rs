use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory record store. Owned here and passed to repositories.
    pub pool: echoroom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
