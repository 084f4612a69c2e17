#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist. Carries the full client-facing
    /// message (e.g. "Árbol no encontrado") so handlers control the wording.
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
