use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Both the current-call and last-call transcript slots are empty.
    /// Surfaced as a user-visible notice; no file is produced.
    #[error("no transcript available to export")]
    EmptyTranscript,

    /// The underlying voice session transport failed.
    #[error("session transport error: {0}")]
    Transport(String),
}
