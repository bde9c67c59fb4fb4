//! Resource client errors.

use serde_json::Value;
use thiserror::Error;

/// Errors produced by the resource client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request was sent but no response came back.
    #[error("no response from server")]
    Network(#[source] reqwest::Error),

    /// The server responded with a non-2xx status.
    #[error("server rejected the request with status {status}")]
    Api {
        /// HTTP status code of the rejection.
        status: u16,
        /// Response body, decoded best-effort.
        payload: Value,
    },

    /// The session is no longer valid; the login redirect hook has already run.
    #[error("session is no longer valid")]
    Unauthorized,

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether a manual retry of the failed operation can reasonably succeed.
    ///
    /// Transport failures may be transient, as may 409/429 rejections. All
    /// other failures are terminal for the operation that produced them.
    /// Nothing in this crate retries on its own; retry is a caller decision.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => matches!(status, 409 | 429),
            Self::Unauthorized | Self::Decode(_) => false,
        }
    }
}
