//! Error types for registry client operations.

use thiserror::Error;

/// Errors that can occur during a registry search.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP client construction failed.
    #[error("client configuration error: {0}")]
    Config(String),
    /// Connection or network failure before a full response arrived.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The service answered with a failure status.
    #[error("service error: status {status}: {message}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error payload returned by the service.
        message: String,
    },
    /// The response body could not be parsed into event records.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
