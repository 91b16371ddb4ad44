use sqlx::FromRow;
use thiserror::Error as ThisError;

/// Store errors surfaced to the caller, not retried.
#[derive(Debug, Clone, ThisError)]
pub enum StoreError {
    #[error("username {0:?} is already taken")]
    DuplicateUsername(String),
}

/// Model errors
#[derive(Debug, Clone, ThisError)]
pub enum QueryError {
    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow)]
pub struct Id<T> {
    pub id: T,
}
