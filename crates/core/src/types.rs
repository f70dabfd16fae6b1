//! Shared identifier and timestamp types.

/// Identifier of a saved or published form.
pub type FormId = uuid::Uuid;

/// Identifier of a question inside a form. Stable for the question's
/// lifetime; used as the reorder key and as the response-record key.
pub type QuestionId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh random identifier.
///
/// Random UUIDs rather than timestamps, so two entities created in the same
/// instant can never collide.
pub fn new_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}
