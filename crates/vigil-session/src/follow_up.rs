//! Follow-up submission: phone pre-validation and the proxy client.

use serde_json::Value;
use tracing::warn;
use vigil_types::{CallStatus, OutboundCallRequest, TranscriptEntry};

/// Minimum digits-and-punctuation length for a plausible phone number.
const MIN_PHONE_LEN: usize = 10;

/// Client-side phone check: trimmed input, optional leading `+`, then at
/// least [`MIN_PHONE_LEN`] characters drawn from digits, spaces, hyphens,
/// and parentheses. The proxy re-validates with its own (looser) pattern.
pub fn validate_phone_number(phone: &str) -> bool {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    rest.len() >= MIN_PHONE_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

/// Strips everything except digits and `+` before submission.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Submits a collected transcript and destination number to the follow-up
/// proxy endpoint, mapping the outcome into a [`CallStatus`].
///
/// Single-shot and user-initiated: a failure is reported, never retried.
#[derive(Debug, Clone)]
pub struct FollowUpClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl FollowUpClient {
    /// `endpoint_url` is the full proxy URL, e.g.
    /// `http://localhost:3000/api/outbound-call`.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Validates locally, posts the request, and resolves the status.
    pub async fn submit(
        &self,
        phone_number: &str,
        transcript: &[TranscriptEntry],
    ) -> CallStatus {
        if !validate_phone_number(phone_number) {
            return CallStatus::Error {
                message: "Please enter a valid phone number".to_string(),
            };
        }
        if transcript.is_empty() {
            return CallStatus::Error {
                message: "No transcript available for follow-up".to_string(),
            };
        }

        let request = OutboundCallRequest {
            phone_number: normalize_phone_number(phone_number),
            transcript: transcript.to_vec(),
        };

        let response = match self
            .http
            .post(&self.endpoint_url)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("follow-up submission failed: {}", e);
                return CallStatus::Error {
                    message: "Network error. Please try again.".to_string(),
                };
            }
        };

        let ok = response.status().is_success();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("follow-up response was not valid JSON: {}", e);
                return CallStatus::Error {
                    message: "Failed to initiate follow-up call".to_string(),
                };
            }
        };

        if ok && body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let case_reference = body
                .get("caseReference")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            CallStatus::Success {
                case_reference,
                message: "Follow-up call initiated successfully!".to_string(),
            }
        } else {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Failed to initiate follow-up call")
                .to_string();
            CallStatus::Error { message }
        }
    }
}
