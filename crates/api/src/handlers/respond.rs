//! Handlers for the public respondent surface.
//!
//! Both endpoints resolve the *published snapshot*, never the live editable
//! copy, so respondents always answer against the content frozen at publish
//! time.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use formforge_core::error::CoreError;
use formforge_core::respond::{Answer, ResponseDraft};
use formforge_core::types::{FormId, QuestionId};
use formforge_store::{PublishedRepo, ResponseRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request payload of a submit: the respondent's assembled answers, keyed
/// by question id.
#[derive(Debug, Deserialize)]
pub struct SubmitResponses {
    #[serde(default)]
    pub responses: BTreeMap<QuestionId, Answer>,
}

/// GET /api/v1/respond/{id}
///
/// The published snapshot for anonymous answering. Missing or unpublished
/// forms are NotFound.
pub async fn get_published_form(
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let snapshot = PublishedRepo::find(state.storage.as_ref(), form_id)?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Published form",
            id: form_id,
        },
    ))?;

    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/respond/{id}
///
/// Validate required questions and append one immutable record to the
/// response log. A required question left blank blocks the append.
pub async fn submit_responses(
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
    Json(input): Json<SubmitResponses>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();
    let snapshot = PublishedRepo::find(storage, form_id)?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Published form",
            id: form_id,
        },
    ))?;

    let record =
        ResponseDraft::from_answers(&snapshot, input.responses).submit(chrono::Utc::now())?;
    ResponseRepo::append(storage, &record)?;

    tracing::info!(form_id = %form_id, "Response recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
