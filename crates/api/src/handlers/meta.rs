//! Handler for the editor catalog: the question types and themes the
//! editor's pickers offer. Static data, but served so clients never
//! hardcode the closed sets.

use axum::Json;
use serde::Serialize;

use formforge_core::question::QuestionType;
use formforge_core::theme::{Theme, ThemeTokens};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// One selectable theme, with the label and style tokens a picker renders.
#[derive(Debug, Serialize)]
pub struct ThemeEntry {
    pub id: Theme,
    pub label: &'static str,
    pub tokens: ThemeTokens,
}

/// The static catalogs backing the editor's pickers.
#[derive(Debug, Serialize)]
pub struct EditorCatalog {
    pub question_types: Vec<QuestionType>,
    pub themes: Vec<ThemeEntry>,
}

/// GET /api/v1/meta
///
/// The question-type and theme catalogs, in display order.
pub async fn get_catalog(_user: AuthUser) -> Json<DataResponse<EditorCatalog>> {
    let themes = Theme::ALL
        .iter()
        .map(|theme| ThemeEntry {
            id: *theme,
            label: theme.label(),
            tokens: theme.tokens(),
        })
        .collect();

    Json(DataResponse {
        data: EditorCatalog {
            question_types: QuestionType::ALL.to_vec(),
            themes,
        },
    })
}
