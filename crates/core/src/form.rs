//! Form entities and the publish lifecycle.
//!
//! A [`Form`] is the live editable copy; a [`PublishedForm`] is the
//! byte-for-byte snapshot respondents answer against. Publishing freezes the
//! content at publish time -- later edits to the working copy never
//! retroactively change a snapshot already referenced by collected
//! responses.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::question::QuestionList;
use crate::theme::Theme;
use crate::types::{FormId, Timestamp};

/// Placeholder title of a freshly created form.
pub const DEFAULT_TITLE: &str = "Untitled Form";

/// Placeholder description of a freshly created form.
pub const DEFAULT_DESCRIPTION: &str = "Form description";

/// The live, editable form aggregate. Questions are value-like children with
/// no identity outside their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub questions: QuestionList,
    #[serde(default)]
    pub published: bool,
    pub created_at: Timestamp,
}

impl Form {
    /// Check the publish preconditions: title, description, and question
    /// list must all be non-empty. Reported as a validation error, never a
    /// crash, and nothing is written when this fails.
    pub fn validate_for_publish(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("Form title must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Form description must not be empty".into(),
            ));
        }
        if self.questions.is_empty() {
            return Err(CoreError::Validation(
                "Form must contain at least one question".into(),
            ));
        }
        Ok(())
    }
}

/// An immutable-at-publish-time copy of a form, plus its derived shareable
/// link. `published` on the embedded form is always true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedForm {
    #[serde(flatten)]
    pub form: Form,
    pub link: String,
}

impl PublishedForm {
    /// Take a full independent snapshot of `form`, deriving the shareable
    /// link from the form id. Does not validate; see
    /// [`Form::validate_for_publish`].
    pub fn snapshot_of(form: &Form, base_url: &str) -> Self {
        let mut snapshot = form.clone();
        snapshot.published = true;
        PublishedForm {
            link: respond_link(base_url, form.id),
            form: snapshot,
        }
    }
}

/// The deterministic respondent link for a form id:
/// `<base-url>/respond/<form-id>`.
pub fn respond_link(base_url: &str, id: FormId) -> String {
    format!("{}/respond/{id}", base_url.trim_end_matches('/'))
}
