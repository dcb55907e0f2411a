//! Error types for the llamavocs client.

use llamavocs_rpc::RpcError;
use thiserror::Error;

/// The error type for client calls.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// For a server that is not listening, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused - the server is likely not running.
    #[error("Could not connect to the LlamaVocs server. Is it running?")]
    ConnectionRefused,

    /// The procedure ran and failed, or its input was rejected.
    ///
    /// The message is passed through unchanged from the server.
    #[error(transparent)]
    Remote(#[from] RpcError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response had neither a result nor an error.
    #[error("server returned an empty response")]
    EmptyResponse,
}

/// A specialized Result type for client calls.
pub type Result<T> = std::result::Result<T, Error>;
