use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{storage::StorageError, ZooError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("Forbidden: `{0}`")]
    Forbidden(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(StorageError),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<StorageError> for WebError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::EntityNotFound(msg) => WebError::NotFound(msg),
            StorageError::Duplicate(msg) => {
                WebError::BadRequest(format!("duplicate entry: {msg}"))
            }
            other => WebError::StorageError(other),
        }
    }
}

impl From<ZooError> for WebError {
    fn from(e: ZooError) -> Self {
        match e {
            ZooError::StorageError(inner) => WebError::from(inner),
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized => {
                body["error"] = json!("Unauthorized");
                HttpResponse::Unauthorized().json(body)
            }
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::Forbidden(_) => {
                body["error"] = json!("Forbidden");
                HttpResponse::Forbidden().json(body)
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::StorageError(_) => {
                body["error"] = json!("Storage Error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
