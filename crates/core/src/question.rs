//! The question model: an ordered list of typed question entities and its
//! mutation operations.
//!
//! All list operations are pure and value-returning -- they consume the list
//! and hand back the updated one, so callers (the editor session, tests)
//! never observe a half-applied mutation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, QuestionId};

/// Default prompt for a freshly added question.
pub const DEFAULT_QUESTION_TEXT: &str = "Untitled Question";

// ---------------------------------------------------------------------------
// Question kinds
// ---------------------------------------------------------------------------

/// Selector for the closed set of question types a form can contain.
///
/// Serialized as the lowercase type name (`"text"`, `"radio"`, ...), matching
/// the `type` tag on [`QuestionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Number,
    Radio,
    Checkbox,
    Dropdown,
    Date,
    Time,
    File,
}

impl QuestionType {
    /// Every question type, in the order the editor offers them.
    pub const ALL: [QuestionType; 8] = [
        QuestionType::Text,
        QuestionType::Number,
        QuestionType::Radio,
        QuestionType::Checkbox,
        QuestionType::Dropdown,
        QuestionType::Date,
        QuestionType::Time,
        QuestionType::File,
    ];
}

/// A question's type together with the fields meaningful to that type.
///
/// Choice-like kinds carry their option list; `File` carries its `multiple`
/// flag; scalar kinds carry nothing. This makes "options are empty for
/// scalar types" a structural guarantee instead of a convention every
/// creation site has to remember.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Number,
    Date,
    Time,
    Radio { options: Vec<String> },
    Checkbox { options: Vec<String> },
    Dropdown { options: Vec<String> },
    File {
        #[serde(default)]
        multiple: bool,
    },
}

impl QuestionKind {
    /// A fresh kind of the given type. Choice-like kinds are seeded with a
    /// single `"Option 1"` placeholder so the editor never renders a choice
    /// question with nothing to pick; file questions start single-attachment.
    pub fn seeded(question_type: QuestionType) -> Self {
        let seed = || vec!["Option 1".to_string()];
        match question_type {
            QuestionType::Text => QuestionKind::Text,
            QuestionType::Number => QuestionKind::Number,
            QuestionType::Date => QuestionKind::Date,
            QuestionType::Time => QuestionKind::Time,
            QuestionType::Radio => QuestionKind::Radio { options: seed() },
            QuestionType::Checkbox => QuestionKind::Checkbox { options: seed() },
            QuestionType::Dropdown => QuestionKind::Dropdown { options: seed() },
            QuestionType::File => QuestionKind::File { multiple: false },
        }
    }

    /// The type selector for this kind.
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::Text => QuestionType::Text,
            QuestionKind::Number => QuestionType::Number,
            QuestionKind::Date => QuestionType::Date,
            QuestionKind::Time => QuestionType::Time,
            QuestionKind::Radio { .. } => QuestionType::Radio,
            QuestionKind::Checkbox { .. } => QuestionType::Checkbox,
            QuestionKind::Dropdown { .. } => QuestionType::Dropdown,
            QuestionKind::File { .. } => QuestionType::File,
        }
    }

    /// The option list for choice-like kinds, `None` otherwise.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::Radio { options }
            | QuestionKind::Checkbox { options }
            | QuestionKind::Dropdown { options } => Some(options),
            _ => None,
        }
    }

    fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            QuestionKind::Radio { options }
            | QuestionKind::Checkbox { options }
            | QuestionKind::Dropdown { options } => Some(options),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One question of a form. Value-like child of its parent form; its id is
/// assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// A new question of the given type with a fresh id, the default prompt,
    /// and `required` off.
    pub fn new(question_type: QuestionType) -> Self {
        Question {
            id: new_id(),
            text: DEFAULT_QUESTION_TEXT.to_string(),
            required: false,
            kind: QuestionKind::seeded(question_type),
        }
    }
}

// ---------------------------------------------------------------------------
// Question list operations
// ---------------------------------------------------------------------------

/// The ordered list of questions of one form. Order is significant (display
/// order is response order) and changes only through [`QuestionList::reorder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionList(Vec<Question>);

impl QuestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.0.iter().find(|q| q.id == id)
    }

    /// Append a new question of the given type.
    pub fn add(mut self, question_type: QuestionType) -> Self {
        self.0.push(Question::new(question_type));
        self
    }

    /// Remove the question with the given id. Absent ids are a no-op, not an
    /// error.
    pub fn remove(mut self, id: QuestionId) -> Self {
        self.0.retain(|q| q.id != id);
        self
    }

    /// Replace the prompt of the matching question.
    pub fn update_text(self, id: QuestionId, text: impl Into<String>) -> Self {
        let text = text.into();
        self.map_question(id, |q| q.text = text)
    }

    /// Append one placeholder option, numbered one past the current count,
    /// to the matching question. No-op for kinds without options.
    pub fn add_option(self, id: QuestionId) -> Self {
        self.map_question(id, |q| {
            if let Some(options) = q.kind.options_mut() {
                let label = format!("Option {}", options.len() + 1);
                options.push(label);
            }
        })
    }

    /// Replace the option at `index` for the matching question.
    ///
    /// An out-of-range index is a caller error: the option sequence is never
    /// silently grown or shrunk.
    pub fn update_option(
        mut self,
        id: QuestionId,
        index: usize,
        value: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let Some(question) = self.0.iter_mut().find(|q| q.id == id) else {
            return Ok(self);
        };
        let Some(options) = question.kind.options_mut() else {
            return Err(CoreError::Validation(format!(
                "Question '{}' has no options to update",
                question.text
            )));
        };
        match options.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(self)
            }
            None => Err(CoreError::Validation(format!(
                "Option index {index} is out of range (question has {} options)",
                options.len()
            ))),
        }
    }

    /// Flip the required flag of the matching question.
    pub fn toggle_required(self, id: QuestionId) -> Self {
        self.map_question(id, |q| q.required = !q.required)
    }

    /// Append a deep copy of the question with the given id, under a fresh
    /// id, at the end of the list. Absent ids are a no-op.
    pub fn duplicate(mut self, id: QuestionId) -> Self {
        if let Some(original) = self.get(id) {
            let mut copy = original.clone();
            copy.id = new_id();
            self.0.push(copy);
        }
        self
    }

    /// Move the question identified by `from` to the position currently
    /// occupied by `to`, shifting the entries in between. No-op when
    /// `from == to` or either id is absent.
    pub fn reorder(mut self, from: QuestionId, to: QuestionId) -> Self {
        if from == to {
            return self;
        }
        let from_index = self.0.iter().position(|q| q.id == from);
        let to_index = self.0.iter().position(|q| q.id == to);
        if let (Some(from_index), Some(to_index)) = (from_index, to_index) {
            let question = self.0.remove(from_index);
            self.0.insert(to_index, question);
        }
        self
    }

    fn map_question(mut self, id: QuestionId, apply: impl FnOnce(&mut Question)) -> Self {
        if let Some(question) = self.0.iter_mut().find(|q| q.id == id) {
            apply(question);
        }
        self
    }
}

impl From<Vec<Question>> for QuestionList {
    fn from(questions: Vec<Question>) -> Self {
        QuestionList(questions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
