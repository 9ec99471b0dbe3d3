use crate::types::DbId;

/// Domain error taxonomy shared by every layer.
///
/// The API crate owns the single mapping from these variants to HTTP
/// responses; nothing below the HTTP boundary knows about status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Dependency failure: {0}")]
    Dependency(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
