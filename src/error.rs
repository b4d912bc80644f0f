use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("store unavailable: {0}")]
    Unavailable(#[source] StoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

/// Detail of a 5xx kept off the wire; read back by the failure-logging
/// middleware so it can be logged next to the request URL.
#[derive(Debug, Clone)]
pub struct InternalFailure(pub String);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, failure) = match self {
            ApiError::NotFound(message) => (message.to_string(), None),
            ApiError::Validation(message) => (message, None),
            ApiError::Unavailable(err) => (
                "Database connection error".to_string(),
                Some(InternalFailure(err.to_string())),
            ),
            ApiError::Store(err) => (
                "Internal server error".to_string(),
                Some(InternalFailure(err.to_string())),
            ),
        };

        let mut response = error_response(status, message);
        if let Some(failure) = failure {
            response.extensions_mut().insert(failure);
        }
        response
    }
}

/// Uniform JSON error body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorResponse {
        error: status.to_string(),
        message: message.into(),
    });

    (status, body).into_response()
}
