//! Route definitions for the `/forms` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /                 -> list
/// POST   /generate         -> generate
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
/// POST   /{id}/publish     -> publish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::list))
        .route("/generate", post(form::generate))
        .route("/{id}", get(form::get_by_id).delete(form::delete))
        .route("/{id}/publish", post(form::publish))
}
