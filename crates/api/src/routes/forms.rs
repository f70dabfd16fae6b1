//! Route definitions for the saved-forms collection, mounted at `/forms`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// ```text
/// GET    /               -> list_forms
/// POST   /               -> save_form
/// GET    /{id}           -> get_form
/// DELETE /{id}           -> delete_form
/// POST   /{id}/publish   -> publish_form
/// GET    /{id}/link      -> copy_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_forms).post(forms::save_form))
        .route("/{id}", get(forms::get_form).delete(forms::delete_form))
        .route("/{id}/publish", post(forms::publish_form))
        .route("/{id}/link", get(forms::copy_link))
}
