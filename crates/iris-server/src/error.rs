//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Transport-level request errors with HTTP status code mapping.
///
/// Inference failures never become an `AppError`; they are reported in a 200 body.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    UnsupportedMediaType(String),
    UnprocessableEntity(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::UnprocessableEntity(message),
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType(message),
            _ => AppError::BadRequest(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            AppError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
