//! Follow-up call submission lifecycle.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a successful submission is displayed before the status resets to
/// [`CallStatus::Idle`]. The UI owns the timer; this is only the agreed delay.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// State of one follow-up call submission.
///
/// Lifecycle: starts at `Idle`, moves to `Initiating` on submit, resolves to
/// `Success` or `Error` from the proxy response, and auto-resets to `Idle`
/// after [`STATUS_RESET_DELAY`] following a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CallStatus {
    /// No submission in flight.
    Idle,
    /// A submission has been sent and is awaiting the proxy response.
    Initiating,
    /// The proxy accepted the request and the external platform is placing
    /// the call.
    Success {
        #[serde(rename = "caseReference")]
        case_reference: String,
        message: String,
    },
    /// The submission failed; `message` is the human-readable reason.
    Error { message: String },
}

impl CallStatus {
    /// True while a submission is in flight (UI disables the form).
    pub fn is_initiating(&self) -> bool {
        matches!(self, Self::Initiating)
    }

    /// The display message for this status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Initiating => None,
            Self::Success { message, .. } | Self::Error { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_with_tag_and_case_reference() {
        let status = CallStatus::Success {
            case_reference: "PV-1700000000000-A1B2C3".to_string(),
            message: "Follow-up call initiated successfully!".to_string(),
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["caseReference"], "PV-1700000000000-A1B2C3");
    }

    #[test]
    fn idle_and_initiating_carry_no_message() {
        assert_eq!(CallStatus::Idle.message(), None);
        assert!(CallStatus::Initiating.is_initiating());
    }
}
