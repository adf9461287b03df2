//! Transcript data model and line formatting.

use serde::{Deserialize, Serialize};

/// One turn of a conversation: who spoke, what they said, and when.
///
/// Entries are created once per message event during an active call and are
/// never mutated afterwards. Ordering is insertion order (chronological).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Display name of the speaker: `"You"` for the caller, otherwise the
    /// agent's display name.
    pub speaker: String,
    /// The spoken text.
    pub text: String,
    /// Human-readable local time string, e.g. `"10:00:00"`.
    pub timestamp: String,
}

impl TranscriptEntry {
    pub fn new(
        speaker: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Renders transcript entries as one line per entry, in input order:
/// `[timestamp] speaker: text`, joined with newlines.
///
/// This is the shared layout used by both the client-side export and the
/// proxy-side formatted transcript block.
pub fn format_transcript_lines(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("[{}] {}: {}", entry.timestamp, entry.speaker, entry.text))
        .collect::<Vec<_>>()
        .join("\n")
}
