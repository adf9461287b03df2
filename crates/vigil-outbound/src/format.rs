//! The fixed transcript block handed to the follow-up agent.

use chrono::{DateTime, Local};
use vigil_types::{format_transcript_lines, TranscriptEntry};

/// Display name of the inbound agent that took the initial call.
pub const INBOUND_AGENT: &str = "Andrew (Lydra AI)";

/// Role label for the person who reported the case.
pub const CALLER_ROLE: &str = "Patient/Reporter";

/// Renders the initial call transcript into the fixed plain-text block passed
/// to the follow-up agent as a dynamic variable: a descriptive header naming
/// the inbound agent and caller roles, one `[timestamp] speaker: text` line
/// per entry, and an end marker.
pub fn format_initial_call_transcript(
    entries: &[TranscriptEntry],
    now: DateTime<Local>,
) -> String {
    format!(
        "=== INITIAL PHARMACOVIGILANCE CALL TRANSCRIPT ===\n\
         Date: {}\n\
         Inbound Agent: {}\n\
         Caller: {}\n\
         \n\
         TRANSCRIPT:\n\
         {}\n\
         \n\
         === END TRANSCRIPT ===",
        now.format("%Y-%m-%d %H:%M:%S"),
        INBOUND_AGENT,
        CALLER_ROLE,
        format_transcript_lines(entries),
    )
}
