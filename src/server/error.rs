//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for the crate [`Error`] so that route handlers
//! can return `Result<T, AppError>` directly.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::Error;

/// Wrapper so we can implement `IntoResponse` for the crate error type.
pub struct AppError {
    inner: Error,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self { inner }
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in page handler"
            );
        }

        let body = format!(
            "<!doctype html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status, self.inner
        );

        (status, Html(body)).into_response()
    }
}
