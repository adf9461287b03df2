//! API error type mapping to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed validation (shape or format). The message is
    /// actionable and returned verbatim.
    #[error("invalid input: {0}")]
    BadRequest(String),

    /// Required external credentials are absent from configuration. The
    /// response message is deliberately vague; which credential is missing is
    /// logged internally only.
    #[error("server configuration error")]
    Configuration,

    /// The external platform rejected the call-initiation request. Its status
    /// code and a details string are relayed verbatim for debuggability.
    #[error("upstream rejected the request ({status}): {details}")]
    Upstream { status: u16, details: String },

    /// Unexpected runtime failure, caught at the boundary and reported as a
    /// generic server error with the underlying message attached.
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error. Missing required credentials.".to_string(),
                None,
            ),
            ApiError::Upstream { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to initiate outbound call".to_string(),
                Some(details),
            ),
            ApiError::InternalServerError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(details),
            ),
        };

        let mut body = serde_json::json!({ "error": error });
        if let Some(details) = details {
            body["details"] = Value::String(details);
        }

        (status, Json(body)).into_response()
    }
}
