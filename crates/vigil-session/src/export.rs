//! Plain-text transcript export.

use crate::error::SessionError;
use crate::transcript_log::TranscriptLog;
use chrono::{DateTime, SecondsFormat, Utc};
use vigil_types::format_transcript_lines;

/// Title line of the exported transcript file.
pub const EXPORT_TITLE: &str = "ANDREW VOICE CALL TRANSCRIPT";

/// A rendered transcript file: suggested filename plus the full text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptExport {
    /// `andrew-call-transcript-<ISO timestamp with ':' replaced by '-'>.txt`
    pub filename: String,
    pub body: String,
}

/// Renders the log into the fixed export layout: a header block (title,
/// generation timestamp, entry count), one `[timestamp] speaker: text` line
/// per entry, and a footer marker.
///
/// Exports the current call if it has entries, otherwise the retained last
/// call. Fails with [`SessionError::EmptyTranscript`] when both are empty.
pub fn export_transcript(
    log: &TranscriptLog,
    now: DateTime<Utc>,
) -> Result<TranscriptExport, SessionError> {
    let entries = log
        .entries_for_export()
        .ok_or(SessionError::EmptyTranscript)?;

    let generated_at = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let filename = format!(
        "andrew-call-transcript-{}.txt",
        generated_at.replace(':', "-")
    );

    let body = format!(
        "=== {} ===\n\
         Generated: {}\n\
         Entries: {}\n\
         \n\
         {}\n\
         \n\
         === END TRANSCRIPT ===\n",
        EXPORT_TITLE,
        generated_at,
        entries.len(),
        format_transcript_lines(entries),
    );

    Ok(TranscriptExport { filename, body })
}
