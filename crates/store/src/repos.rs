//! Typed repositories over the document store.
//!
//! Each repository owns one named document and exposes the operations the
//! rest of the system needs: upsert keyed by id (last-write-wins), lookup,
//! append. Deleting a saved form touches only the saved-forms document --
//! published snapshots and collected responses are never cascaded.

use serde::de::DeserializeOwned;
use serde::Serialize;

use formforge_core::editor::Draft;
use formforge_core::form::{Form, PublishedForm};
use formforge_core::respond::ResponseRecord;
use formforge_core::types::FormId;

use crate::error::StoreError;
use crate::storage::Storage;

/// Document name of the saved (editable) forms list.
pub const FORMS_DOC: &str = "forms";
/// Document name of the published snapshots list.
pub const PUBLISHED_DOC: &str = "publishedForms";
/// Document name of the append-only response log.
pub const RESPONSES_DOC: &str = "formResponses";
/// Document name of the draft-autosave slot.
pub const DRAFT_DOC: &str = "formDraft";

// ---------------------------------------------------------------------------
// Document (de)serialization helpers
// ---------------------------------------------------------------------------

fn load<T: DeserializeOwned>(storage: &dyn Storage, name: &str) -> Result<Option<T>, StoreError> {
    let Some(contents) = storage.read_document(name)? else {
        return Ok(None);
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })
}

fn load_list<T: DeserializeOwned>(storage: &dyn Storage, name: &str) -> Result<Vec<T>, StoreError> {
    Ok(load(storage, name)?.unwrap_or_default())
}

fn save<T: Serialize>(storage: &dyn Storage, name: &str, value: &T) -> Result<(), StoreError> {
    let contents = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        name: name.to_string(),
        source,
    })?;
    storage.write_document(name, &contents)?;
    tracing::debug!(document = name, bytes = contents.len(), "Document written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Saved forms
// ---------------------------------------------------------------------------

pub struct FormRepo;

impl FormRepo {
    pub fn list(storage: &dyn Storage) -> Result<Vec<Form>, StoreError> {
        load_list(storage, FORMS_DOC)
    }

    pub fn find(storage: &dyn Storage, id: FormId) -> Result<Option<Form>, StoreError> {
        Ok(Self::list(storage)?.into_iter().find(|f| f.id == id))
    }

    /// Insert or replace the entry with the form's id. Last write wins.
    pub fn upsert(storage: &dyn Storage, form: &Form) -> Result<(), StoreError> {
        let mut forms = Self::list(storage)?;
        match forms.iter_mut().find(|f| f.id == form.id) {
            Some(existing) => *existing = form.clone(),
            None => forms.push(form.clone()),
        }
        save(storage, FORMS_DOC, &forms)
    }

    /// Remove the saved entry only. Returns whether an entry was removed.
    pub fn delete(storage: &dyn Storage, id: FormId) -> Result<bool, StoreError> {
        let mut forms = Self::list(storage)?;
        let before = forms.len();
        forms.retain(|f| f.id != id);
        if forms.len() == before {
            return Ok(false);
        }
        save(storage, FORMS_DOC, &forms)?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Published snapshots
// ---------------------------------------------------------------------------

pub struct PublishedRepo;

impl PublishedRepo {
    pub fn list(storage: &dyn Storage) -> Result<Vec<PublishedForm>, StoreError> {
        load_list(storage, PUBLISHED_DOC)
    }

    pub fn find(storage: &dyn Storage, id: FormId) -> Result<Option<PublishedForm>, StoreError> {
        Ok(Self::list(storage)?.into_iter().find(|p| p.form.id == id))
    }

    /// Replace the snapshot for the form id, or append the first one.
    pub fn upsert(storage: &dyn Storage, snapshot: &PublishedForm) -> Result<(), StoreError> {
        let mut snapshots = Self::list(storage)?;
        match snapshots.iter_mut().find(|p| p.form.id == snapshot.form.id) {
            Some(existing) => *existing = snapshot.clone(),
            None => snapshots.push(snapshot.clone()),
        }
        save(storage, PUBLISHED_DOC, &snapshots)
    }
}

// ---------------------------------------------------------------------------
// Response log
// ---------------------------------------------------------------------------

pub struct ResponseRepo;

impl ResponseRepo {
    pub fn list(storage: &dyn Storage) -> Result<Vec<ResponseRecord>, StoreError> {
        load_list(storage, RESPONSES_DOC)
    }

    /// All records collected for one form, in submission order.
    pub fn for_form(storage: &dyn Storage, id: FormId) -> Result<Vec<ResponseRecord>, StoreError> {
        Ok(Self::list(storage)?
            .into_iter()
            .filter(|r| r.form_id == id)
            .collect())
    }

    /// Append one record to the log. Records are immutable once written.
    pub fn append(storage: &dyn Storage, record: &ResponseRecord) -> Result<(), StoreError> {
        let mut records = Self::list(storage)?;
        records.push(record.clone());
        save(storage, RESPONSES_DOC, &records)
    }
}

// ---------------------------------------------------------------------------
// Draft-autosave slot
// ---------------------------------------------------------------------------

pub struct DraftRepo;

impl DraftRepo {
    pub fn load(storage: &dyn Storage) -> Result<Option<Draft>, StoreError> {
        load(storage, DRAFT_DOC)
    }

    pub fn save(storage: &dyn Storage, draft: &Draft) -> Result<(), StoreError> {
        save(storage, DRAFT_DOC, draft)
    }

    pub fn clear(storage: &dyn Storage) -> Result<(), StoreError> {
        storage.delete_document(DRAFT_DOC)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
