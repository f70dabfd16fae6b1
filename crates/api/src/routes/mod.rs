pub mod draft;
pub mod forms;
pub mod health;
pub mod meta;
pub mod respond;
pub mod responses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms                      list (GET, ?search=&page=), save (POST)
/// /forms/{id}                 get editable copy (GET), delete (DELETE)
/// /forms/{id}/publish         validate and publish snapshot (POST)
/// /forms/{id}/link            shareable link of current snapshot (GET)
///
/// /respond/{id}               published snapshot for answering (GET, public)
/// /respond/{id}               submit a response (POST, public)
///
/// /responses/{id}             collected responses, rendered (GET)
///
/// /draft                      autosaved idless draft (GET, PUT, DELETE)
///
/// /meta                       question-type and theme catalogs (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Saved-forms collection: listing, editing lifecycle, publishing.
        .nest("/forms", forms::router())
        // Static editor catalogs (question types, themes).
        .nest("/meta", meta::router())
        // Public respondent surface, addressed by form id.
        .nest("/respond", respond::router())
        // Responses viewer (read-only).
        .nest("/responses", responses::router())
        // Draft-autosave slot for new editor sessions.
        .nest("/draft", draft::router())
}
