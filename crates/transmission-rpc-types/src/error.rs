//! Error type shared by every Transmission RPC call.

use thiserror::Error;

/// Error type for Transmission RPC operations.
///
/// Every variant is terminal for the call that produced it. The only failure
/// the client recovers from internally is a stale session id, which surfaces
/// as [`TransmissionError::Session`] once the retry budget is spent.
#[derive(Error, Debug)]
pub enum TransmissionError {
    /// The request envelope could not be serialized.
    #[error("failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Network-related errors (connection failures, broken responses, etc.)
    #[error("transport error: {0}")]
    Transport(String),

    /// The daemon kept answering with a session id conflict until the retry
    /// budget ran out.
    #[error("invalid session id after {attempts} attempt(s)")]
    Session {
        /// Number of dispatch attempts made before giving up.
        attempts: u32,
    },

    /// The daemon answered, but with a result other than `"success"`.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The call was cancelled or ran past its deadline.
    #[error("request cancelled")]
    Cancelled,

    /// The daemon rejected the configured credentials.
    #[error("authentication required")]
    Unauthorized,

    /// The daemon reported success with a non-success HTTP status.
    #[error("unexpected http status: {0}")]
    UnexpectedStatus(u16),

    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid rpc url: {0}")]
    InvalidUrl(String),
}

impl TransmissionError {
    /// Whether repeating the whole call later could succeed.
    ///
    /// Transport failures and exhausted session handshakes are usually
    /// transient. Everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Session { .. })
    }
}
