//! Shared types for the Vigil follow-up call service.
//!
//! This crate provides the foundational types used across all Vigil crates:
//! the transcript data model, the follow-up call status lifecycle, and the
//! proxy wire contract. No crate in the workspace depends on anything *except*
//! `vigil-types` for cross-cutting type definitions, which keeps the
//! dependency graph clean and prevents circular dependencies.

pub mod outbound;
pub mod status;
pub mod transcript;

pub use outbound::{OutboundCallRequest, OutboundCallResponse};
pub use status::CallStatus;
pub use transcript::{format_transcript_lines, TranscriptEntry};
