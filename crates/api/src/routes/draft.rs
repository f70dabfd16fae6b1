//! Route definitions for the draft-autosave slot, mounted at `/draft`.

use axum::routing::get;
use axum::Router;

use crate::handlers::draft;
use crate::state::AppState;

/// ```text
/// GET    /  -> get_draft
/// PUT    /  -> save_draft
/// DELETE /  -> clear_draft
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(draft::get_draft)
            .put(draft::save_draft)
            .delete(draft::clear_draft),
    )
}
