//! Handlers for the saved-forms collection: listing, editing, publishing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use formforge_core::error::CoreError;
use formforge_core::form::{Form, PublishedForm};
use formforge_core::question::QuestionList;
use formforge_core::theme::Theme;
use formforge_core::types::{new_id, FormId, Timestamp};
use formforge_store::{DraftRepo, FormRepo, PublishedRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::FormsListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fixed page size of the forms list.
pub const PAGE_SIZE: usize = 6;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request payload of a save: the editor's whole working state. A missing
/// `id` means a first save; one is assigned and returned.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveForm {
    pub id: Option<FormId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub questions: QuestionList,
}

/// One row of the forms list.
#[derive(Debug, Serialize)]
pub struct FormSummary {
    pub id: FormId,
    pub title: String,
    pub description: String,
    pub published: bool,
    pub created_at: Timestamp,
}

impl From<&Form> for FormSummary {
    fn from(form: &Form) -> Self {
        FormSummary {
            id: form.id,
            title: form.title.clone(),
            description: form.description.clone(),
            published: form.published,
            created_at: form.created_at,
        }
    }
}

/// Paginated forms list payload.
#[derive(Debug, Serialize)]
pub struct FormsPage {
    pub forms: Vec<FormSummary>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// A saved form together with its published snapshot's link, if any.
#[derive(Debug, Serialize)]
pub struct FormDetail {
    #[serde(flatten)]
    pub form: Form,
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/forms?search=&page=
///
/// Case-insensitive substring filter on the title, fixed page size. The
/// page index is taken as given: an out-of-range page yields an empty page
/// rather than snapping back to page 1.
pub async fn list_forms(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FormsListParams>,
) -> AppResult<impl IntoResponse> {
    let forms = FormRepo::list(state.storage.as_ref())?;

    let needle = params.search.unwrap_or_default().to_lowercase();
    let matching: Vec<&Form> = forms
        .iter()
        .filter(|f| f.title.to_lowercase().contains(&needle))
        .collect();

    let page = params.page.unwrap_or(1).max(1);
    // Saturating: an absurdly large page must slice to empty, not overflow.
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let summaries: Vec<FormSummary> = matching
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|f| FormSummary::from(*f))
        .collect();

    Ok(Json(DataResponse {
        data: FormsPage {
            total: matching.len(),
            page,
            page_size: PAGE_SIZE,
            forms: summaries,
        },
    }))
}

// ---------------------------------------------------------------------------
// Editing lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/forms
///
/// Upsert the editor's working state, keyed by id (last-write-wins). A
/// first save assigns the id and clears the draft-autosave slot, since the
/// session is no longer idless.
pub async fn save_form(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveForm>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();
    let first_save = input.id.is_none();
    let id = input.id.unwrap_or_else(new_id);

    // Publish flag and creation time survive a re-save of an existing form.
    let existing = FormRepo::find(storage, id)?;
    let form = Form {
        id,
        title: input.title,
        description: input.description,
        theme: input.theme,
        questions: input.questions,
        published: existing.as_ref().is_some_and(|f| f.published),
        created_at: existing
            .as_ref()
            .map(|f| f.created_at)
            .unwrap_or_else(chrono::Utc::now),
    };
    FormRepo::upsert(storage, &form)?;

    if first_save {
        DraftRepo::clear(storage)?;
    }

    tracing::info!(form_id = %form.id, title = %form.title, "Form saved");

    let status = if first_save {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: form })))
}

/// GET /api/v1/forms/{id}
///
/// Load the saved (editable) copy for the owner. A missing id on this
/// explicit edit path is NotFound, never a silent default.
pub async fn get_form(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();
    let form = FormRepo::find(storage, form_id)?.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Form",
        id: form_id,
    }))?;

    let link = PublishedRepo::find(storage, form_id)?.map(|p| p.link);

    Ok(Json(DataResponse {
        data: FormDetail { form, link },
    }))
}

/// DELETE /api/v1/forms/{id}
///
/// Remove the saved entry only. Published snapshots and collected
/// responses stay in place (no cascade).
pub async fn delete_form(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FormRepo::delete(state.storage.as_ref(), form_id)?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id: form_id,
        }));
    }

    tracing::info!(form_id = %form_id, "Form deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Publishing
// ---------------------------------------------------------------------------

/// POST /api/v1/forms/{id}/publish
///
/// Validate and publish: writes a full independent snapshot into the
/// published collection and marks the saved copy published. Later edits to
/// the saved copy never alter the snapshot until the next publish.
pub async fn publish_form(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();
    let mut form = FormRepo::find(storage, form_id)?.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Form",
        id: form_id,
    }))?;

    form.validate_for_publish()?;

    let snapshot = PublishedForm::snapshot_of(&form, &state.config.public_base_url);
    PublishedRepo::upsert(storage, &snapshot)?;

    form.published = true;
    FormRepo::upsert(storage, &form)?;

    tracing::info!(form_id = %form.id, link = %snapshot.link, "Form published");

    Ok(Json(DataResponse { data: snapshot }))
}

/// GET /api/v1/forms/{id}/link
///
/// The current published snapshot's shareable link. Never fabricated: an
/// unpublished form reports NotPublished instead.
pub async fn copy_link(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();

    if let Some(snapshot) = PublishedRepo::find(storage, form_id)? {
        return Ok(Json(DataResponse {
            data: serde_json::json!({ "link": snapshot.link }),
        }));
    }

    if FormRepo::find(storage, form_id)?.is_some() {
        Err(AppError::Core(CoreError::NotPublished { id: form_id }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id: form_id,
        }))
    }
}
