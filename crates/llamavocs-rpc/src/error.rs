//! Error types for llamavocs-rpc.
//!
//! Every failure a caller can observe is an [`RpcError`]: a machine-readable
//! [`ErrorCode`], a message, and for validation failures the list of
//! field-level [`Issue`]s. The same value is what travels on the wire.
//!
//! Absent cards are not errors: `card.getOne` answers `null` instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::{Issue, ValidationError};

/// Result type for procedure calls.
pub type Result<T> = std::result::Result<T, RpcError>;

/// Category of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input violated the procedure's contract.
    BadRequest,
    /// Input was not valid JSON.
    ParseError,
    /// No procedure exists at the requested path.
    NotFound,
    /// A mutation was requested through a query-only method.
    MethodNotSupported,
    /// The card store failed.
    InternalServerError,
}

impl ErrorCode {
    /// HTTP status used when this error crosses the HTTP transport.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::BadRequest | ErrorCode::ParseError => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::MethodNotSupported => 405,
            ErrorCode::InternalServerError => 500,
        }
    }
}

/// A failed procedure call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RpcError {
    /// Error category.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// Field-level issues, for [`ErrorCode::BadRequest`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl RpcError {
    /// Create an error without issues.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// No procedure at `path`.
    pub fn not_found(path: &str) -> Self {
        Self::new(ErrorCode::NotFound, format!("no procedure at '{path}'"))
    }

    /// `path` is a mutation and cannot be called as a query.
    pub fn method_not_supported(path: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotSupported,
            format!("'{path}' is a mutation and must be called with POST"),
        )
    }

    /// Input could not be parsed.
    pub fn parse(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::ParseError, format!("invalid JSON input: {err}"))
    }

    /// Internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }
}

impl From<ValidationError> for RpcError {
    fn from(err: ValidationError) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: err.to_string(),
            issues: err.issues,
        }
    }
}

impl From<llamavocs_store::Error> for RpcError {
    fn from(err: llamavocs_store::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {err}"))
    }
}

/// Wire envelope for every response: `{"result": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The output of a successful call. `null` is a valid output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// The failure, if the call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl<T> Envelope<T> {
    /// A successful response.
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// A failed response.
    pub fn failure(error: RpcError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }
}
