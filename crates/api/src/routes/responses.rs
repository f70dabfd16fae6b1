//! Route definitions for the responses viewer, mounted at `/responses`.

use axum::routing::get;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// ```text
/// GET /{id}  -> list_responses
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(responses::list_responses))
}
