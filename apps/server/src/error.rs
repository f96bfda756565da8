use std::io::Error as IoError;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failures that can abort server startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0:#}")]
    Io(#[from] IoError),
    #[error("Address parsing error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),
    #[error("Pool setup error: {0}")]
    Pool(#[from] deadpool::managed::BuildError),
    #[error("{0:#}")]
    Migration(#[from] anyhow::Error),
}

/// Failures surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Monitor {0} not found")]
    MonitorNotFound(i64),
    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MonitorNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}
