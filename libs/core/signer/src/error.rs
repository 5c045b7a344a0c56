// [libs/core/signer/src/error.rs]
use thiserror::Error;

/// Signer failures. Always surfaces to callers as `VALIDATION_ERROR`.
/// Signing on well-formed input must never fail.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SignerError {
    #[error("invalid seed: {0}")]
    Validation(String),
}
