// [libs/infra/transport/src/error.rs]
//! The typed error taxonomy. Every error surfaced by this crate, whether
//! raised locally or parsed from a server response, carries the same
//! shape so callers never have to distinguish "local" from "remote"
//! failures structurally.

use serde::{Deserialize, Serialize};

/// Stable wire values for the `code` field of a server error envelope.
/// Renamed via `SCREAMING_SNAKE_CASE` so the derived (de)serialization
/// matches the platform's error code table exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidSignature,
    UnknownAgent,
    KeyRevoked,
    AgentFrozen,
    TtlExpired,
    ReplayDetected,
    PrevHashMismatch,
    PayloadTooLarge,
    RateLimited,
    Unauthorized,
    Forbidden,
    NotFound,
    ValidationError,
    InternalError,
}

/// A typed, uniform transport error. `status` is `0` for errors raised
/// locally, meaning the request never reached the network.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[error("[{code:?}] {message} (status {status}, request {request_id})")]
pub struct ElydoraError {
    pub status: u16,
    pub code: ErrorCode,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<serde_json::Value>,
}

impl ElydoraError {
    /// A local `VALIDATION_ERROR`: malformed seed, non-finite number,
    /// invalid base64url, or any other failure that never touched the
    /// network.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            code: ErrorCode::ValidationError,
            message: message.into(),
            request_id: "unknown".to_string(),
            details: None,
        }
    }

    /// A local `INTERNAL_ERROR`: a transport-level failure (connection,
    /// DNS, TLS, timeout) that survived every retry, or a response body
    /// this client could not parse.
    pub fn internal_local(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            code: ErrorCode::InternalError,
            message: message.into(),
            request_id: "unknown".to_string(),
            details: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
