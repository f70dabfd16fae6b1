//! Handlers for the draft-autosave slot.
//!
//! The slot mirrors the working state of a *new* (idless) editor session on
//! every change and is restored on the next new session only. Drafts carry
//! no form id, so they can never leak into the editing session of a saved
//! form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use formforge_core::editor::Draft;
use formforge_store::DraftRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/draft
///
/// The autosaved draft, or 204 when the slot is empty.
pub async fn get_draft(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let draft = DraftRepo::load(state.storage.as_ref())?;

    match draft {
        Some(d) => Ok(Json(DataResponse { data: d }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// PUT /api/v1/draft
///
/// Mirror the current idless editing state into the slot.
pub async fn save_draft(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(draft): Json<Draft>,
) -> AppResult<impl IntoResponse> {
    DraftRepo::save(state.storage.as_ref(), &draft)?;
    Ok(Json(DataResponse { data: draft }))
}

/// DELETE /api/v1/draft
///
/// Clear the slot (reset, or first save of the session).
pub async fn clear_draft(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    DraftRepo::clear(state.storage.as_ref())?;
    Ok(StatusCode::NO_CONTENT)
}
