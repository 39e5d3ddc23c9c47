use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::PresentationGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formgen_db::DbPool,
    /// Server configuration (accessed by middleware and the router).
    pub config: Arc<ServerConfig>,
    /// Boundary between authenticated callers and the generation pipeline.
    pub gateway: Arc<PresentationGateway>,
}
