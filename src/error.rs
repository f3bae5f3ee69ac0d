use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERR_DATABASE, ERR_INVALID_CREDENTIALS};
use crate::db::StoreError;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Storage failure reported with a generic message only
    #[error("Database error: {0}")]
    Database(#[source] StoreError),

    /// Storage failure reported with the driver message as `details`
    #[error("{message}: {source}")]
    Query {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(&'static str),

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AppError {
    pub fn query(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Query { message, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": ERR_DATABASE }),
                )
            }
            AppError::Query {
                message,
                ref source,
            } => {
                tracing::error!("{}: {:?}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "details": source.to_string() }),
                )
            }
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": ERR_INVALID_CREDENTIALS }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
