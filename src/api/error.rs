use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::logic::InvalidNumber;

/// Request-scoped failures and how each one is reported to the client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    InvalidQuery(#[from] InvalidNumber),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Body of a 400 response for a rejected product payload
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            ApiError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    errors: vec![message],
                }),
            )
                .into_response(),
            ApiError::InvalidQuery(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            ApiError::NotFound(message) => {
                log::debug!("{}", message);
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Internal(e) => {
                log::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
