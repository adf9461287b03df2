//! Client session surface for the Vigil voice-call demo.
//!
//! Holds the state a browser-style client carries during a call: the two-slot
//! transcript log (current call + one-call retention of the last call), the
//! plain-text transcript export, a thin adapter over an externally-owned
//! real-time voice session, and the follow-up submission client that forwards
//! a transcript and phone number to the proxy endpoint.
//!
//! The live session itself (WebRTC transport, audio) is owned by the external
//! conversational-AI platform; this crate only maps its message events into
//! transcript entries and reflects connection state.

pub mod error;
pub mod export;
pub mod follow_up;
pub mod session;
pub mod transcript_log;
pub mod transport;

pub use error::SessionError;
pub use export::{export_transcript, TranscriptExport};
pub use follow_up::{normalize_phone_number, validate_phone_number, FollowUpClient};
pub use session::CallSession;
pub use transcript_log::TranscriptLog;
pub use transport::{ConvaiClient, MessageSource, SessionConfig, SessionEvent, SessionTransport};
