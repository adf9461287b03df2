//! Abstraction over the externally-owned real-time voice session.

use crate::error::SessionError;
use tokio::sync::broadcast;
use tracing::info;

/// Default capacity for the per-session message broadcast channel.
const DEFAULT_MESSAGE_BROADCAST_CAPACITY: usize = 256;

/// Parameters for opening a live voice session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Identifier of the conversational agent to connect to.
    pub agent_id: String,
    /// Transport requested from the platform, e.g. `"webrtc"`.
    pub connection_type: String,
}

impl SessionConfig {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            connection_type: "webrtc".to_string(),
        }
    }
}

/// Origin of a message event within the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// The human caller.
    User,
    /// The conversational agent.
    Agent,
}

/// One message event emitted by the live session.
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub source: MessageSource,
    pub text: String,
}

/// The capability contract of the external voice session: connect,
/// disconnect, and a subscribable message-event stream.
///
/// The session itself is owned by the external platform; implementations are
/// thin adapters. Keeping the seam here lets the call-session logic be tested
/// without a real network session.
pub trait SessionTransport {
    /// Opens the live session.
    fn connect(
        &mut self,
        config: &SessionConfig,
    ) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;

    /// Closes the live session. Any in-flight events resolve and are ignored.
    fn disconnect(&mut self) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;

    /// Subscribes to message events from this session.
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;

    /// Whether the agent is currently speaking (presentation signal only).
    fn is_speaking(&self) -> bool;
}

/// A client for the platform's real-time conversational session.
///
/// In a production deployment this would wrap the platform's WebRTC session
/// object. Here it is a simulation with the same surface: a connected flag, a
/// speaking signal, and a broadcast stream of message events.
#[derive(Debug)]
pub struct ConvaiClient {
    connected: bool,
    speaking: bool,
    message_tx: broadcast::Sender<SessionEvent>,
}

impl Default for ConvaiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvaiClient {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(DEFAULT_MESSAGE_BROADCAST_CAPACITY);
        Self {
            connected: false,
            speaking: false,
            message_tx: tx,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Simulates a message event arriving from the live session.
    pub fn simulate_message(
        &self,
        source: MessageSource,
        text: &str,
    ) -> Result<(), SessionError> {
        if !self.connected {
            return Err(SessionError::Transport(
                "session is not connected".to_string(),
            ));
        }

        let event = SessionEvent {
            source,
            text: text.to_string(),
        };
        // No receivers is fine; the event is simply dropped.
        let _ = self.message_tx.send(event);
        Ok(())
    }

    /// Simulates the agent's speaking-state signal.
    pub fn set_speaking(&mut self, speaking: bool) {
        self.speaking = speaking;
    }
}

impl SessionTransport for ConvaiClient {
    async fn connect(&mut self, config: &SessionConfig) -> Result<(), SessionError> {
        info!(
            agent_id = %config.agent_id,
            connection_type = %config.connection_type,
            "connecting live voice session"
        );

        // Simulate connection delay.
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), SessionError> {
        if self.connected {
            info!("disconnecting live voice session");
            self.connected = false;
            self.speaking = false;
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.message_tx.subscribe()
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }
}
