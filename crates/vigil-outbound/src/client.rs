//! HTTP client for the platform's call-initiation API.

use crate::config::ElevenLabsConfig;
use crate::error::OutboundError;
use crate::format::format_initial_call_transcript;
use chrono::{Local, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use vigil_types::TranscriptEntry;

/// Wire payload for `POST /v1/convai/twilio/outbound-call`.
#[derive(Debug, Serialize)]
struct OutboundCallPayload<'a> {
    agent_id: &'a str,
    agent_phone_number_id: &'a str,
    to_number: String,
    conversation_initiation_client_data: ClientData<'a>,
}

#[derive(Debug, Serialize)]
struct ClientData<'a> {
    dynamic_variables: DynamicVariables<'a>,
}

/// Context made available to the follow-up agent at call time.
#[derive(Debug, Serialize)]
struct DynamicVariables<'a> {
    initial_call_transcript: &'a str,
    call_date: String,
    case_reference: &'a str,
}

/// Result of a successfully initiated outbound call.
#[derive(Debug, Clone)]
pub struct InitiatedCall {
    /// The platform's identifier for the placed call. `"unknown"` when the
    /// platform response omits it.
    pub call_id: String,
}

/// Client for initiating outbound follow-up calls through the platform.
///
/// One instance is shared across all requests; `reqwest::Client` is
/// internally pooled. No request timeout is configured — a hung upstream
/// holds the proxy request until the transport's own default gives up.
#[derive(Debug, Clone)]
pub struct OutboundCallClient {
    http: reqwest::Client,
    config: ElevenLabsConfig,
}

impl OutboundCallClient {
    pub fn new(config: ElevenLabsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ElevenLabsConfig {
        &self.config
    }

    /// Issues the single call-initiation request.
    ///
    /// `to_number` has whitespace stripped before being sent. The transcript
    /// is rendered into the fixed block and passed, with the call date and
    /// case reference, as dynamic variables for the follow-up agent.
    ///
    /// Deliberately never retried: initiation carries no idempotency key, so
    /// a retry could place a duplicate call.
    pub async fn initiate(
        &self,
        to_number: &str,
        transcript: &[TranscriptEntry],
        case_reference: &str,
    ) -> Result<InitiatedCall, OutboundError> {
        let formatted = format_initial_call_transcript(transcript, Local::now());

        let payload = OutboundCallPayload {
            agent_id: &self.config.agent_id,
            agent_phone_number_id: &self.config.phone_number_id,
            to_number: to_number.split_whitespace().collect(),
            conversation_initiation_client_data: ClientData {
                dynamic_variables: DynamicVariables {
                    initial_call_transcript: &formatted,
                    call_date: Utc::now().to_rfc3339(),
                    case_reference,
                },
            },
        };

        info!(
            case_reference,
            transcript_len = formatted.len(),
            agent_id = %self.config.agent_id,
            "initiating outbound follow-up call"
        );

        let url = format!(
            "{}/v1/convai/twilio/outbound-call",
            self.config.api_base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "call-initiation API rejected the request");
            return Err(OutboundError::Api {
                status: status.as_u16(),
                details: format!("API returned {}: {}", status.as_u16(), reason),
            });
        }

        let result: Value = response.json().await?;
        let call_id = result
            .get("conversation_id")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        info!(case_reference, %call_id, "outbound call initiated");

        Ok(InitiatedCall { call_id })
    }
}
