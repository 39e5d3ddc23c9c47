pub mod form;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /forms                       list (auth required)
/// /forms/generate              generate from a description (POST)
/// /forms/{id}                  get tree, delete (owner only)
/// /forms/{id}/publish          publish (POST, owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/forms", form::router())
}
