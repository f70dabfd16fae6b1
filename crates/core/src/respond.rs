//! Respondent answer collection against a published snapshot.
//!
//! A [`ResponseDraft`] maps each question type to its answer semantics:
//! scalars are last-write-wins, checkboxes behave as a set, file attachments
//! respect the per-question `multiple` flag. Submitting validates required
//! questions and produces an immutable [`ResponseRecord`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::PublishedForm;
use crate::question::QuestionKind;
use crate::types::{FormId, QuestionId, Timestamp};

/// Placeholder shown by the responses viewer for an unanswered question.
pub const NO_RESPONSE: &str = "No response";

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// One recorded answer. Scalar for text/number/date/time and single-choice
/// questions; a sequence for checkbox sets and file-handle lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scalar(String),
    Many(Vec<String>),
}

impl Answer {
    /// Whether this answer counts as given for a required question.
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Scalar(value) => value.trim().is_empty(),
            Answer::Many(values) => values.is_empty(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Scalar(value) => f.write_str(value),
            Answer::Many(values) => f.write_str(&values.join(", ")),
        }
    }
}

/// One respondent's complete set of answers to a published snapshot.
/// Immutable once appended to the response log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub form_id: FormId,
    pub responses: BTreeMap<QuestionId, Answer>,
    pub timestamp: Timestamp,
}

impl ResponseRecord {
    /// The recorded answer for a question, rendered for display, or the
    /// explicit [`NO_RESPONSE`] placeholder when absent.
    pub fn rendered_answer(&self, question_id: QuestionId) -> String {
        match self.responses.get(&question_id) {
            Some(answer) if !answer.is_blank() => answer.to_string(),
            _ => NO_RESPONSE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Draft collection
// ---------------------------------------------------------------------------

/// In-progress answers against one published snapshot.
#[derive(Debug, Clone)]
pub struct ResponseDraft<'a> {
    form: &'a PublishedForm,
    responses: BTreeMap<QuestionId, Answer>,
}

impl<'a> ResponseDraft<'a> {
    pub fn new(form: &'a PublishedForm) -> Self {
        ResponseDraft {
            form,
            responses: BTreeMap::new(),
        }
    }

    /// Adopt a fully assembled answers map (e.g. from a client that did the
    /// per-interaction collection itself). Still subject to the same
    /// required-question validation at submit.
    pub fn from_answers(form: &'a PublishedForm, responses: BTreeMap<QuestionId, Answer>) -> Self {
        ResponseDraft { form, responses }
    }

    /// Record a scalar answer (text/number/date/time, radio/dropdown
    /// selection). Last write wins.
    pub fn answer(&mut self, question_id: QuestionId, value: impl Into<String>) {
        self.responses
            .insert(question_id, Answer::Scalar(value.into()));
    }

    /// Record a checkbox toggle. Checking adds the option to the set,
    /// unchecking removes it; re-checking an already-checked option never
    /// duplicates the entry.
    pub fn toggle(&mut self, question_id: QuestionId, option: &str, checked: bool) {
        // A stray scalar under a checkbox id is replaced by set semantics.
        let mut values = match self.responses.remove(&question_id) {
            Some(Answer::Many(values)) => values,
            _ => Vec::new(),
        };
        if checked {
            if !values.iter().any(|v| v == option) {
                values.push(option.to_string());
            }
        } else {
            values.retain(|v| v != option);
        }
        self.responses.insert(question_id, Answer::Many(values));
    }

    /// Attach a file handle. Without the question's `multiple` flag a second
    /// attachment replaces the first; with it, handles accumulate.
    pub fn attach(&mut self, question_id: QuestionId, handle: impl Into<String>) {
        let multiple = match self.form.form.questions.get(question_id) {
            Some(question) => match question.kind {
                QuestionKind::File { multiple } => multiple,
                _ => return,
            },
            None => return,
        };

        let handle = handle.into();
        let handles = match (self.responses.remove(&question_id), multiple) {
            (Some(Answer::Many(mut handles)), true) => {
                handles.push(handle);
                handles
            }
            _ => vec![handle],
        };
        self.responses.insert(question_id, Answer::Many(handles));
    }

    /// Validate required questions and seal the draft into a record.
    ///
    /// A required question left blank blocks the submit with a validation
    /// error naming the prompt; nothing is appended until it is satisfied.
    pub fn submit(self, now: Timestamp) -> Result<ResponseRecord, CoreError> {
        for question in self.form.form.questions.iter() {
            if !question.required {
                continue;
            }
            let answered = self
                .responses
                .get(&question.id)
                .is_some_and(|answer| !answer.is_blank());
            if !answered {
                return Err(CoreError::Validation(format!(
                    "Question '{}' requires an answer",
                    question.text
                )));
            }
        }

        Ok(ResponseRecord {
            form_id: self.form.form.id,
            responses: self.responses,
            timestamp: now,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
