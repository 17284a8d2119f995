pub mod init;
pub mod rbac;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use rbac::RbacError;
use sea_orm::{DbErr, TransactionError};
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type ZooResult<T, E = ZooError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum ZooError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    RbacError(#[from] RbacError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("Initialization error: {0}")]
    InitializationError(String),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl From<String> for ZooError {
    #[inline]
    fn from(e: String) -> Self {
        ZooError::Msg(e)
    }
}

impl From<&str> for ZooError {
    #[inline]
    fn from(e: &str) -> Self {
        ZooError::Msg(e.to_string())
    }
}

impl From<DbErr> for ZooError {
    #[inline]
    fn from(e: DbErr) -> Self {
        ZooError::StorageError(StorageError::from(e))
    }
}

impl From<TransactionError<ZooError>> for ZooError {
    #[inline]
    fn from(e: TransactionError<ZooError>) -> Self {
        match e {
            TransactionError::Connection(e) => ZooError::from(e),
            TransactionError::Transaction(e) => e,
        }
    }
}
