//! Call session: the thin adapter between the live transport and the log.

use crate::error::SessionError;
use crate::export::{export_transcript, TranscriptExport};
use crate::transcript_log::TranscriptLog;
use crate::transport::{MessageSource, SessionConfig, SessionEvent, SessionTransport};
use chrono::{Local, Utc};
use tracing::warn;
use vigil_types::TranscriptEntry;

/// Wraps a [`SessionTransport`] and maps its message events into transcript
/// entries. Carries no state machine beyond "connected / not connected" and
/// the transcript log itself.
#[derive(Debug)]
pub struct CallSession<T: SessionTransport> {
    transport: T,
    agent_name: String,
    connected: bool,
    log: TranscriptLog,
}

impl<T: SessionTransport> CallSession<T> {
    pub fn new(transport: T, agent_name: impl Into<String>) -> Self {
        Self {
            transport,
            agent_name: agent_name.into(),
            connected: false,
            log: TranscriptLog::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn transcript(&self) -> &TranscriptLog {
        &self.log
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Opens the live session and starts a fresh current transcript.
    ///
    /// A connect failure is logged and leaves the session in its prior
    /// disconnected state; there is no automatic recovery.
    pub async fn start_call(&mut self, config: &SessionConfig) {
        match self.transport.connect(config).await {
            Ok(()) => {
                self.log.clear_current();
                self.connected = true;
            }
            Err(e) => {
                warn!("failed to start call: {}", e);
            }
        }
    }

    /// Closes the live session and, if the call produced any entries, moves
    /// them into the last-call retention slot.
    ///
    /// A disconnect failure is logged and leaves the session connected.
    pub async fn end_call(&mut self) {
        match self.transport.disconnect().await {
            Ok(()) => {
                self.connected = false;
                if !self.log.current().is_empty() {
                    self.log.snapshot_and_clear();
                }
            }
            Err(e) => {
                warn!("failed to end call: {}", e);
            }
        }
    }

    /// Maps one inbound message event to a transcript entry and appends it.
    ///
    /// The speaker is `"You"` for user-sourced events, otherwise the agent's
    /// display name. The entry is stamped with the local time.
    pub fn handle_message(&mut self, event: SessionEvent) {
        let speaker = match event.source {
            MessageSource::User => "You".to_string(),
            MessageSource::Agent => self.agent_name.clone(),
        };
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.log
            .append(TranscriptEntry::new(speaker, event.text, timestamp));
    }

    /// Renders the transcript (current call, or the retained last call) into
    /// a downloadable text file.
    pub fn export(&self) -> Result<TranscriptExport, SessionError> {
        export_transcript(&self.log, Utc::now())
    }
}
