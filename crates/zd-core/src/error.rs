//! Error type shared by every API call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by a Zendesk API call. Nothing is retried; every variant
/// reaches the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Curl reported an error (connect, TLS, timeout, etc.).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// Response status outside 2xx.
    #[error("HTTP {status}: {body}")]
    Status { status: u32, body: String },

    /// Call required an exact status and got another one (even a 2xx).
    #[error("expected HTTP {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: u32,
        actual: u32,
        body: String,
    },

    /// Response body did not match the expected envelope.
    #[error("decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be serialized.
    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid client config: {0}")]
    Config(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// Blocking transfer task panicked or was dropped by the runtime.
    #[error("runtime: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

impl Error {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }

    /// True if the call was stopped by its `RequestContext`.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Cancelled | Error::DeadlineExceeded)
    }
}
