use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("note not found or not owned by caller")]
    NoteNotFoundOrForbidden,

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
