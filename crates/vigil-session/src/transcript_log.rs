//! Two-slot transcript retention.

use vigil_types::TranscriptEntry;

/// Append-only transcript log with explicit two-slot retention.
///
/// `current` accumulates entries for the active call; `last_call` holds the
/// previous call's transcript for exactly one call. The single retention rule:
/// ending a call moves `current` into `last_call` (replacing it) and empties
/// `current`. Entries are never mutated after insertion.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    current: Vec<TranscriptEntry>,
    last_call: Vec<TranscriptEntry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry to the end of the current-call sequence.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.current.push(entry);
    }

    /// Entries of the active call, in insertion order.
    pub fn current(&self) -> &[TranscriptEntry] {
        &self.current
    }

    /// The retained transcript of the previous call.
    pub fn last_call(&self) -> &[TranscriptEntry] {
        &self.last_call
    }

    /// Copies the current sequence into the last-call slot and empties the
    /// current sequence. Invoked exactly once, when a call ends with a
    /// non-empty transcript.
    pub fn snapshot_and_clear(&mut self) {
        self.last_call = std::mem::take(&mut self.current);
    }

    /// Discards the current-call sequence without touching the last-call
    /// slot. Invoked when a new call starts.
    pub fn clear_current(&mut self) {
        self.current.clear();
    }

    /// The sequence an export should render: the current call if non-empty,
    /// otherwise the last call. `None` when both slots are empty.
    pub fn entries_for_export(&self) -> Option<&[TranscriptEntry]> {
        if !self.current.is_empty() {
            Some(&self.current)
        } else if !self.last_call.is_empty() {
            Some(&self.last_call)
        } else {
            None
        }
    }

    /// True when both slots are empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.last_call.is_empty()
    }
}
