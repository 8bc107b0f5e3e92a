//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::stripe::StripeError;

/// API error type.
///
/// Every variant is reported to the caller as a 500 with the
/// `{success: false, error}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The payment provider call failed.
    #[error(transparent)]
    Provider(#[from] StripeError),

    /// The request body could not be read.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Message exposed in the response body.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Provider(err) => err.message(),
            Self::InvalidBody(_) => self.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Provider(err) => tracing::error!(error = %err, "Stripe request failed"),
            Self::InvalidBody(msg) => tracing::warn!(error = %msg, "Unreadable request body"),
        }

        let body = ErrorResponse {
            success: false,
            error: self.message(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
