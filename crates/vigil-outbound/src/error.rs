use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutboundError {
    /// The platform rejected the call-initiation request with a non-2xx
    /// status. Relayed to the original caller for debuggability.
    #[error("outbound call API error ({status}): {details}")]
    Api { status: u16, details: String },

    /// Transport-level failure (connect, TLS, malformed response body).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}
