//! Request body extraction.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body accepted as either JSON or a url-encoded form.
///
/// An empty body, or one with any other content type, yields `T::default()`
/// so that missing fields are forwarded as absent instead of failing here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: &str) -> BodyKind {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
    {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(BodyKind::Other, body_kind);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let value = match kind {
            BodyKind::Json => serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::InvalidBody(e.to_string()))?,
            BodyKind::Form => serde_urlencoded::from_bytes(&bytes)
                .map_err(|e| ApiError::InvalidBody(e.to_string()))?,
            BodyKind::Other => T::default(),
        };

        Ok(Self(value))
    }
}
