//! Route definitions for the editor catalog, mounted at `/meta`.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// ```text
/// GET /  -> get_catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(meta::get_catalog))
}
