//! Route definitions for the public respondent surface, mounted at
//! `/respond`. No authentication: the shareable link is the only handle a
//! respondent holds.

use axum::routing::get;
use axum::Router;

use crate::handlers::respond;
use crate::state::AppState;

/// ```text
/// GET  /{id}  -> get_published_form
/// POST /{id}  -> submit_responses
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(respond::get_published_form).post(respond::submit_responses),
    )
}
