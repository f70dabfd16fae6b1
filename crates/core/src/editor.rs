//! The form editor session: title/description/theme state composed with the
//! question model, plus the save/publish lifecycle.
//!
//! The session is a synchronous state machine -- every operation completes
//! before the next one is applied. Persistence is the caller's job: `save`
//! and `publish` hand back the documents to write, they never touch a store
//! themselves.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::{Form, PublishedForm, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::question::{QuestionList, QuestionType};
use crate::theme::Theme;
use crate::types::{new_id, FormId, QuestionId, Timestamp};

/// The draft-autosave document mirrored on every change of a *new* (idless)
/// editing session. Deliberately carries no identifier, so a draft can never
/// leak into the editing session of a saved form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub questions: QuestionList,
}

/// In-memory editing state for one form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    /// Assigned on first save and stable thereafter.
    pub id: Option<FormId>,
    pub title: String,
    pub description: String,
    pub theme: Theme,
    pub questions: QuestionList,
    pub published: bool,
    /// The shareable link of the current published snapshot, if any.
    pub published_link: Option<String>,
    created_at: Option<Timestamp>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// A new, never-saved form with placeholder title and description.
    pub fn new() -> Self {
        EditorSession {
            id: None,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            theme: Theme::default(),
            questions: QuestionList::new(),
            published: false,
            published_link: None,
            created_at: None,
        }
    }

    /// Open a saved form for editing. `published_link` is the link of its
    /// published snapshot when one exists.
    pub fn from_form(form: Form, published_link: Option<String>) -> Self {
        EditorSession {
            id: Some(form.id),
            title: form.title,
            description: form.description,
            theme: form.theme,
            questions: form.questions,
            published: form.published,
            published_link,
            created_at: Some(form.created_at),
        }
    }

    /// Restore an idless session from the draft-autosave slot.
    pub fn from_draft(draft: Draft) -> Self {
        EditorSession {
            id: None,
            title: draft.title,
            description: draft.description,
            theme: draft.theme,
            questions: draft.questions,
            published: false,
            published_link: None,
            created_at: None,
        }
    }

    /// The draft document mirroring the current state.
    pub fn draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            description: self.description.clone(),
            theme: self.theme,
            questions: self.questions.clone(),
        }
    }

    // -- metadata ------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // -- question operations -------------------------------------------------

    pub fn add_question(&mut self, question_type: QuestionType) {
        self.with_questions(|q| q.add(question_type));
    }

    pub fn remove_question(&mut self, id: QuestionId) {
        self.with_questions(|q| q.remove(id));
    }

    pub fn update_question_text(&mut self, id: QuestionId, text: impl Into<String>) {
        let text = text.into();
        self.with_questions(|q| q.update_text(id, text));
    }

    pub fn add_option(&mut self, id: QuestionId) {
        self.with_questions(|q| q.add_option(id));
    }

    pub fn update_option(
        &mut self,
        id: QuestionId,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        // Work on a copy so a rejected update leaves the list intact.
        let updated = self.questions.clone().update_option(id, index, value)?;
        self.questions = updated;
        Ok(())
    }

    pub fn toggle_required(&mut self, id: QuestionId) {
        self.with_questions(|q| q.toggle_required(id));
    }

    pub fn duplicate_question(&mut self, id: QuestionId) {
        self.with_questions(|q| q.duplicate(id));
    }

    /// Apply the end of a drag: `over` is the question the drag was dropped
    /// on, or `None` when it was dropped outside any valid target (a no-op,
    /// not an error).
    pub fn apply_drop(&mut self, from: QuestionId, over: Option<QuestionId>) {
        if let Some(to) = over {
            if from != to {
                self.with_questions(|q| q.reorder(from, to));
            }
        }
    }

    fn with_questions(&mut self, apply: impl FnOnce(QuestionList) -> QuestionList) {
        self.questions = apply(std::mem::take(&mut self.questions));
    }

    // -- lifecycle -----------------------------------------------------------

    /// Commit the current state as a form document, assigning an id (and
    /// creation time) on the first save only. The caller upserts the result
    /// into the saved-forms collection.
    pub fn save(&mut self, now: Timestamp) -> Form {
        let id = *self.id.get_or_insert_with(new_id);
        let created_at = *self.created_at.get_or_insert(now);
        Form {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            theme: self.theme,
            questions: self.questions.clone(),
            published: self.published,
            created_at,
        }
    }

    /// Validate and publish: returns the saved copy (now marked published)
    /// and the independent snapshot for the published-forms collection.
    ///
    /// On validation failure the session is left untouched and nothing may
    /// be written.
    pub fn publish(
        &mut self,
        base_url: &str,
        now: Timestamp,
    ) -> Result<(Form, PublishedForm), CoreError> {
        let candidate = Form {
            id: self.id.unwrap_or_else(new_id),
            title: self.title.clone(),
            description: self.description.clone(),
            theme: self.theme,
            questions: self.questions.clone(),
            published: true,
            created_at: self.created_at.unwrap_or(now),
        };
        candidate.validate_for_publish()?;

        self.id = Some(candidate.id);
        self.created_at = Some(candidate.created_at);
        self.published = true;

        let snapshot = PublishedForm::snapshot_of(&candidate, base_url);
        self.published_link = Some(snapshot.link.clone());
        Ok((candidate, snapshot))
    }

    /// The current published snapshot's link. Never fabricated: requesting
    /// it before the first publish is an error.
    pub fn copy_link(&self) -> Result<&str, CoreError> {
        match &self.published_link {
            Some(link) => Ok(link),
            None => Err(CoreError::NotPublished {
                id: self.id.unwrap_or_default(),
            }),
        }
    }

    /// Revert to default title/description, an empty question list, and the
    /// default theme. Confirmation happens in the client; the caller also
    /// clears the draft-autosave slot.
    pub fn reset(&mut self) {
        self.title = DEFAULT_TITLE.to_string();
        self.description = DEFAULT_DESCRIPTION.to_string();
        self.theme = Theme::default();
        self.questions = QuestionList::new();
    }
}
