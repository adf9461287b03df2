//! Wire contract for the follow-up proxy endpoint.

use crate::transcript::TranscriptEntry;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/outbound-call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundCallRequest {
    /// Destination number for the follow-up call. Optional leading `+`, then
    /// digits, spaces, hyphens, and parentheses.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// The initial call's transcript, in chronological order.
    pub transcript: Vec<TranscriptEntry>,
}

/// Response body for a successfully initiated follow-up call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundCallResponse {
    pub success: bool,
    /// Opaque correlation token of the form `PV-<millis>-<6 base36 chars>`.
    #[serde(rename = "caseReference")]
    pub case_reference: String,
    /// The external platform's identifier for the placed call.
    #[serde(rename = "callId")]
    pub call_id: String,
    pub message: String,
}
