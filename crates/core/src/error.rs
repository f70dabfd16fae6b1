use crate::types::FormId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: FormId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Form {id} is not published yet")]
    NotPublished { id: FormId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
