//! # Error Handling Middleware
//!
//! Maps errors to HTTP status codes and `{"error": "..."}` bodies. Broken
//! rules, bad ranges and undecodable requests are 400, a taken slot is 409,
//! and storage failures and panics are 500 with the details kept in the log.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitslot_core::errors::BookingError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    Booking(BookingError),

    /// The body, path or query string could not be decoded.
    BadRequest(String),

    /// A handler panicked; the panic was caught and logged.
    Internal,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Booking(BookingError::Rule(_) | BookingError::Range(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Booking(BookingError::Conflict) => StatusCode::CONFLICT,
            AppError::Booking(BookingError::Storage(_)) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Booking(BookingError::Storage(report)) => {
                error!("Storage failure: {:?}", report);
                INTERNAL_MESSAGE.to_string()
            }
            AppError::Booking(other) => other.to_string(),
            AppError::BadRequest(message) => message,
            AppError::Internal => INTERNAL_MESSAGE.to_string(),
        };
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::Booking(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError::Booking(BookingError::Storage(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Maps a [`BookingError`] straight to a response.
pub fn map_error(err: BookingError) -> Response {
    AppError::Booking(err).into_response()
}
