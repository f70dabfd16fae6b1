//! Handlers for the responses viewer. Read-only.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use formforge_core::error::CoreError;
use formforge_core::types::{FormId, QuestionId, Timestamp};
use formforge_store::{PublishedRepo, ResponseRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One question-answer pair of a rendered response. `answer` falls back to
/// the explicit "No response" placeholder for unanswered questions.
#[derive(Debug, Serialize)]
pub struct AnswerRow {
    pub question_id: QuestionId,
    pub question: String,
    pub answer: String,
}

/// One collected response, rendered against the snapshot's question set.
#[derive(Debug, Serialize)]
pub struct ResponseView {
    pub timestamp: Timestamp,
    pub answers: Vec<AnswerRow>,
}

/// The full responses page for one form.
#[derive(Debug, Serialize)]
pub struct ResponsesPage {
    pub form_id: FormId,
    pub title: String,
    pub description: String,
    pub total: usize,
    pub responses: Vec<ResponseView>,
}

/// GET /api/v1/responses/{id}
///
/// All records collected for the form, each rendered against the published
/// snapshot's question set (answers stay interpretable even after the
/// saved copy is edited or deleted).
pub async fn list_responses(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(form_id): Path<FormId>,
) -> AppResult<impl IntoResponse> {
    let storage = state.storage.as_ref();
    let snapshot = PublishedRepo::find(storage, form_id)?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Published form",
            id: form_id,
        },
    ))?;

    let records = ResponseRepo::for_form(storage, form_id)?;
    let responses: Vec<ResponseView> = records
        .iter()
        .map(|record| ResponseView {
            timestamp: record.timestamp,
            answers: snapshot
                .form
                .questions
                .iter()
                .map(|question| AnswerRow {
                    question_id: question.id,
                    question: question.text.clone(),
                    answer: record.rendered_answer(question.id),
                })
                .collect(),
        })
        .collect();

    Ok(Json(DataResponse {
        data: ResponsesPage {
            form_id,
            title: snapshot.form.title.clone(),
            description: snapshot.form.description.clone(),
            total: responses.len(),
            responses,
        },
    }))
}
