/**
 * Client Error Types
 *
 * Errors surfaced by the client session: transport failures, rejected
 * operations reported by the server, and local storage problems.
 */
use thiserror::Error;

/// Error returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the operation; carries the server's error message
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Session storage failure
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// True when the server reported an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
