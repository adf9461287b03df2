//! Follow-up call proxy handler.
//!
//! `POST /api/outbound-call` accepts a phone number and the initial call's
//! transcript, validates both, and forwards a single call-initiation request
//! to the external voice-agent platform. Stateless per request; concurrent
//! duplicate submissions are not deduplicated and can each place a call.

use crate::{api::ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use vigil_outbound::{generate_case_reference, OutboundError};
use vigil_types::{OutboundCallResponse, TranscriptEntry};

/// Proxy-side phone pattern: optional leading `+`, then digits, spaces,
/// hyphens, and parentheses only.
fn is_valid_phone_number(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

/// Pulls the transcript entries out of the raw body. Entry fields are read
/// leniently; a missing field becomes an empty string rather than a rejection.
fn extract_entries(transcript: &[Value]) -> Vec<TranscriptEntry> {
    transcript
        .iter()
        .map(|value| {
            TranscriptEntry::new(
                value.get("speaker").and_then(Value::as_str).unwrap_or_default(),
                value.get("text").and_then(Value::as_str).unwrap_or_default(),
                value
                    .get("timestamp")
                    .and_then(Value::as_str)
                    .unwrap_or_default(),
            )
        })
        .collect()
}

/// Handler for `POST /api/outbound-call`.
///
/// Validation order is fixed: required fields, phone format, then server
/// credentials. No external request is issued when any check fails, and a
/// failed external request is never retried (no idempotency key — a retry
/// could place a duplicate outbound call).
pub async fn outbound_call_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OutboundCallResponse>, ApiError> {
    // A body that fails to parse at all is an unexpected-input failure, not a
    // shape validation failure.
    let Json(body) = body.map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    let phone_number = body
        .get("phoneNumber")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let transcript = body.get("transcript").and_then(Value::as_array);

    let transcript = match transcript {
        Some(entries) if !phone_number.is_empty() && !entries.is_empty() => entries,
        _ => {
            return Err(ApiError::BadRequest(
                "Missing required fields: phoneNumber and transcript".to_string(),
            ))
        }
    };

    if !is_valid_phone_number(phone_number) {
        return Err(ApiError::BadRequest(
            "Invalid phone number format".to_string(),
        ));
    }

    let missing = state.outbound.config().missing_credentials();
    if !missing.is_empty() {
        // Internal log only; the response never names the missing credential.
        error!(?missing, "outbound call rejected: credentials absent from configuration");
        return Err(ApiError::Configuration);
    }

    let entries = extract_entries(transcript);
    let case_reference = generate_case_reference();

    match state
        .outbound
        .initiate(phone_number, &entries, &case_reference)
        .await
    {
        Ok(call) => Ok(Json(OutboundCallResponse {
            success: true,
            case_reference,
            call_id: call.call_id,
            message: "Follow-up call initiated successfully".to_string(),
        })),
        Err(OutboundError::Api { status, details }) => {
            Err(ApiError::Upstream { status, details })
        }
        Err(e) => {
            error!("outbound call failed unexpectedly: {}", e);
            Err(ApiError::InternalServerError(e.to_string()))
        }
    }
}
