use std::sync::Arc;

use formforge_store::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The injected persistence adapter. Production uses the on-disk
    /// backend; tests swap in the in-memory one.
    pub storage: Arc<dyn Storage>,
    /// Server configuration (base URL, timeouts, JWT secret).
    pub config: Arc<ServerConfig>,
}
