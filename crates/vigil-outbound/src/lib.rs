//! ElevenLabs Conversational AI integration for follow-up calls.
//!
//! Wraps the platform's Twilio call-initiation REST API behind a small
//! client: credentials configuration (injected from the deployment
//! environment, never hard-coded), case-reference generation, the fixed
//! transcript block handed to the follow-up agent as dynamic context, and the
//! single outbound HTTP request that asks the platform to place the call.
//!
//! Initiation is fire-and-forget: there is no idempotency key, so nothing in
//! this crate retries — a retry could place a duplicate outbound call.

pub mod case_reference;
pub mod client;
pub mod config;
pub mod error;
pub mod format;

pub use case_reference::generate_case_reference;
pub use client::{InitiatedCall, OutboundCallClient};
pub use config::ElevenLabsConfig;
pub use error::OutboundError;
pub use format::format_initial_call_transcript;
