//! Error types for the control-plane client.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the control plane.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to control plane at {endpoint}: {source}")]
    Connect {
        endpoint: String,
        source: std::io::Error,
    },

    #[error("http handshake failed: {0}")]
    Handshake(#[source] hyper::Error),

    #[error("request failed: {0}")]
    Request(#[source] hyper::Error),

    #[error("control plane returned {status}: {message}")]
    Api {
        status: http::StatusCode,
        message: String,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),
}
