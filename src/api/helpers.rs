//! Common helper functions for API handlers.
//!
//! Every response leaves through here so the content type and error
//! sanitization stay identical across handlers.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::core::models::ErrorResponse;
use crate::errors::{DilemmaError, sanitize_message};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// ============================================================================
// Response Builders
// ============================================================================

/// Serializes `body` with the given status and a UTF-8 JSON content type.
#[must_use]
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(text) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], text).into_response(),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
                r#"{"error":"Failed to encode response"}"#,
            )
                .into_response()
        }
    }
}

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok<T: Serialize>(body: &T) -> Response {
    json_response(StatusCode::OK, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    json_response(
        status,
        &ErrorResponse {
            error: message.to_string(),
        },
    )
}

/// Returns a 500 carrying the sanitized text of a completion failure.
#[must_use]
pub fn completion_failure(err: &DilemmaError) -> Response {
    error!("Completion failed: {}", err);
    err_response(StatusCode::INTERNAL_SERVER_ERROR, &sanitize_message(err))
}

// ============================================================================
// Request Parsing
// ============================================================================

/// Parses a JSON body, falling back to `T::default()` when the body is
/// empty or malformed so that field validation reports what is missing.
#[must_use]
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!("Ignoring unparsable request body: {}", e);
        T::default()
    })
}

/// Keeps only present, non-empty field values.
#[must_use]
pub fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}
