use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Unique-constraint violation, surfaced to the form layer as a
    /// validation error rather than a 500.
    #[error("duplicate entry: {0}")]
    Duplicate(String),
}

impl From<DbErr> for StorageError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StorageError::Duplicate(msg),
            _ => StorageError::DBError(e),
        }
    }
}
