// [libs/core/codec/src/error.rs]
use thiserror::Error;

/// Local validation failures raised by the codec. Per the wire error
/// taxonomy these always surface to callers as `VALIDATION_ERROR`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CodecError {
    #[error("non-finite numbers cannot be canonicalized")]
    NonFiniteNumber,

    #[error("invalid base64url input")]
    InvalidBase64,

    #[error("malformed JSON input: {0}")]
    MalformedJson(String),
}
